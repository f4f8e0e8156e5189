//! adjgraph — a small in-memory undirected graph.
//!
//! Nodes live in an arena owned by [`Graph`] and are addressed by
//! [`NodeId`] handles. The graph supports vertex and edge mutation,
//! depth-first and breadth-first traversal, and a breadth-first
//! shortest-path query.
//!
//! ```
//! use adjgraph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! let ids = builder.vertices(["A", "B", "C"]);
//! builder.chain(&ids);
//! let graph = builder.build();
//!
//! assert_eq!(graph.bfs_shortest(ids[0], ids[2]), vec![&"A", &"B", &"C"]);
//! ```
//!
//! `Graph` is not synchronized; mutation needs `&mut` access.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, LabeledGraph};
pub use types::{GraphError, GraphResult, Node, NodeId};
