//! Graphs of string-labeled vertices, built from a compact edge list.
//!
//! An edge list is a comma-separated sequence of entries. `A-B` connects the
//! vertices labeled `A` and `B`; a bare `C` adds an isolated vertex. Labels
//! are unique: a label seen twice refers to the same vertex.

use std::collections::HashMap;

use crate::types::{GraphError, GraphResult, NodeId, EDGE_SEPARATOR, ENTRY_SEPARATOR};

use super::Graph;

/// A `Graph<String>` with a label index.
#[derive(Debug, Clone, Default)]
pub struct LabeledGraph {
    graph: Graph<String>,
    labels: HashMap<String, NodeId>,
}

impl LabeledGraph {
    /// Create an empty labeled graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an edge list such as `"A-B,B-C,D"`.
    pub fn from_edge_list(list: &str) -> GraphResult<Self> {
        let mut labeled = Self::new();
        let mut entries = 0usize;

        for raw in list.split(ENTRY_SEPARATOR) {
            let entry = raw.trim();
            if entry.is_empty() {
                continue;
            }
            entries += 1;

            match entry.split_once(EDGE_SEPARATOR) {
                Some((left, right)) => {
                    let (left, right) = (left.trim(), right.trim());
                    if left.is_empty() || right.is_empty() || right.contains(EDGE_SEPARATOR) {
                        return Err(GraphError::InvalidEdge(entry.to_string()));
                    }
                    let v1 = labeled.vertex(left);
                    let v2 = labeled.vertex(right);
                    labeled.graph.add_edge(v1, v2);
                }
                None => {
                    labeled.vertex(entry);
                }
            }
        }

        if entries == 0 {
            return Err(GraphError::EmptyEdgeList);
        }
        Ok(labeled)
    }

    /// Handle of the vertex labeled `label`, creating it if needed.
    pub fn vertex(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.labels.get(label) {
            return id;
        }
        let id = self.graph.create_node(label.to_string());
        self.graph.add_vertex(id);
        self.labels.insert(label.to_string(), id);
        id
    }

    /// Handle of an existing vertex.
    pub fn id(&self, label: &str) -> GraphResult<NodeId> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// The underlying graph (mutable).
    pub fn graph_mut(&mut self) -> &mut Graph<String> {
        &mut self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edges_and_isolated_vertices() {
        let labeled = LabeledGraph::from_edge_list("A-B, B-C ,D").unwrap();
        let graph = labeled.graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);

        let d = labeled.id("D").unwrap();
        assert!(graph.neighbors(d).is_empty());
    }

    #[test]
    fn repeated_label_is_same_vertex() {
        let labeled = LabeledGraph::from_edge_list("A-B,A-C").unwrap();
        let a = labeled.id("A").unwrap();
        assert_eq!(labeled.graph().neighbors(a).len(), 2);
    }

    #[test]
    fn rejects_bad_entries() {
        assert_eq!(
            LabeledGraph::from_edge_list("A-").unwrap_err(),
            GraphError::InvalidEdge("A-".to_string())
        );
        assert_eq!(
            LabeledGraph::from_edge_list("A-B-C").unwrap_err(),
            GraphError::InvalidEdge("A-B-C".to_string())
        );
        assert_eq!(
            LabeledGraph::from_edge_list(" , ").unwrap_err(),
            GraphError::EmptyEdgeList
        );
    }

    #[test]
    fn unknown_label() {
        let labeled = LabeledGraph::from_edge_list("A-B").unwrap();
        assert_eq!(
            labeled.id("Z").unwrap_err(),
            GraphError::UnknownLabel("Z".to_string())
        );
    }

    #[test]
    fn graph_mut_allows_edge_edits() {
        let mut labeled = LabeledGraph::from_edge_list("A-B,B-C").unwrap();
        let a = labeled.id("A").unwrap();
        let b = labeled.id("B").unwrap();
        let c = labeled.id("C").unwrap();

        labeled.graph_mut().remove_edge(a, b);
        labeled.graph_mut().add_edge(a, c);

        assert_eq!(labeled.graph().bfs_shortest(a, b).len(), 3);
        assert_eq!(labeled.graph().neighbors(c), &[b, a]);
    }
}
