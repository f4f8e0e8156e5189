//! CLI entry point for the `graphwalk` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands::{self, TraversalKind};

#[derive(Parser)]
#[command(
    name = "graphwalk",
    about = "graphwalk — traverse small undirected graphs given as edge lists"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Depth-first traversal order
    Dfs {
        /// Edge list, e.g. "A-B,B-C,D"
        edges: String,
        /// Start vertex label
        start: String,
    },
    /// Breadth-first traversal order
    Bfs {
        /// Edge list, e.g. "A-B,B-C,D"
        edges: String,
        /// Start vertex label
        start: String,
    },
    /// Breadth-first path between two vertices
    Path {
        /// Edge list, e.g. "A-B,B-C,D"
        edges: String,
        /// Start vertex label
        start: String,
        /// End vertex label
        end: String,
    },
    /// Vertex and edge counts
    Info {
        /// Edge list, e.g. "A-B,B-C,D"
        edges: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Dfs { edges, start } => {
            commands::cmd_traverse(&edges, &start, TraversalKind::Dfs, json)
        }
        Commands::Bfs { edges, start } => {
            commands::cmd_traverse(&edges, &start, TraversalKind::Bfs, json)
        }
        Commands::Path { edges, start, end } => commands::cmd_path(&edges, &start, &end, json),
        Commands::Info { edges } => commands::cmd_info(&edges, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
