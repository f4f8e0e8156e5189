//! CLI command implementations.
//!
//! Each command parses an edge list into a [`LabeledGraph`], runs one query
//! and prints the result as text or JSON.

use crate::graph::LabeledGraph;
use crate::types::GraphResult;

/// Traversal order used by [`cmd_traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// Depth-first.
    Dfs,
    /// Breadth-first.
    Bfs,
}

impl TraversalKind {
    /// Return a short name for this traversal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
        }
    }
}

/// Print the traversal order from `start`.
pub fn cmd_traverse(
    edges: &str,
    start: &str,
    kind: TraversalKind,
    json: bool,
) -> GraphResult<()> {
    println!("{}", render_traverse(edges, start, kind, json)?);
    Ok(())
}

/// Render the traversal order from `start`.
pub fn render_traverse(
    edges: &str,
    start: &str,
    kind: TraversalKind,
    json: bool,
) -> GraphResult<String> {
    let labeled = LabeledGraph::from_edge_list(edges)?;
    let start_id = labeled.id(start)?;
    let graph = labeled.graph();
    let ids = match kind {
        TraversalKind::Dfs => graph.depth_first_search_nodes(start_id),
        TraversalKind::Bfs => graph.breadth_first_search_nodes(start_id),
    };
    let order: Vec<&String> = ids.iter().filter_map(|&id| graph.value(id)).collect();

    if json {
        let info = serde_json::json!({
            "traversal": kind.name(),
            "start": start,
            "order": order,
            "ids": ids,
        });
        Ok(serde_json::to_string_pretty(&info).unwrap_or_default())
    } else {
        Ok(join_path(&order))
    }
}

/// Print the breadth-first path from `start` to `end`.
pub fn cmd_path(edges: &str, start: &str, end: &str, json: bool) -> GraphResult<()> {
    println!("{}", render_path(edges, start, end, json)?);
    Ok(())
}

/// Render the breadth-first path from `start` to `end`.
pub fn render_path(edges: &str, start: &str, end: &str, json: bool) -> GraphResult<String> {
    let labeled = LabeledGraph::from_edge_list(edges)?;
    let start_id = labeled.id(start)?;
    let end_id = labeled.id(end)?;
    let graph = labeled.graph();
    let ids = graph.bfs_shortest_nodes(start_id, end_id);
    let path: Vec<&String> = ids.iter().filter_map(|&id| graph.value(id)).collect();

    if json {
        let info = serde_json::json!({
            "start": start,
            "end": end,
            "path": path,
            "ids": ids,
            "hops": path.len().saturating_sub(1),
        });
        Ok(serde_json::to_string_pretty(&info).unwrap_or_default())
    } else if path.is_empty() {
        Ok(format!("No path from {} to {}", start, end))
    } else {
        Ok(join_path(&path))
    }
}

/// Print vertex and edge counts plus each vertex's neighbors.
pub fn cmd_info(edges: &str, json: bool) -> GraphResult<()> {
    println!("{}", render_info(edges, json)?);
    Ok(())
}

/// Render vertex and edge counts plus each vertex's neighbors.
pub fn render_info(edges: &str, json: bool) -> GraphResult<String> {
    let labeled = LabeledGraph::from_edge_list(edges)?;
    let graph = labeled.graph();

    let rows: Vec<(&String, Vec<&String>)> = graph
        .vertices()
        .iter()
        .filter_map(|&id| {
            let label = graph.value(id)?;
            let neighbors = graph
                .neighbors(id)
                .iter()
                .filter_map(|&n| graph.value(n))
                .collect();
            Some((label, neighbors))
        })
        .collect();

    if json {
        let vertices: Vec<serde_json::Value> = rows
            .iter()
            .map(|(label, neighbors)| {
                serde_json::json!({
                    "label": label,
                    "degree": neighbors.len(),
                    "neighbors": neighbors,
                })
            })
            .collect();
        let info = serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "vertices": vertices,
        });
        Ok(serde_json::to_string_pretty(&info).unwrap_or_default())
    } else {
        let mut out = format!(
            "Nodes: {}\nEdges: {}",
            graph.node_count(),
            graph.edge_count()
        );
        for (label, neighbors) in rows {
            let joined: Vec<&str> = neighbors.iter().map(|s| s.as_str()).collect();
            out.push_str(&format!("\n  {}: {}", label, joined.join(", ")));
        }
        Ok(out)
    }
}

fn join_path(values: &[&String]) -> String {
    let parts: Vec<&str> = values.iter().map(|s| s.as_str()).collect();
    parts.join(" -> ")
}
