//! Fluent API for building Graph instances.

use crate::types::NodeId;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Every node created through the builder is registered as a vertex.
pub struct GraphBuilder<T> {
    graph: Graph<T>,
}

impl<T> GraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Create a builder with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            graph: Graph::with_capacity(capacity),
        }
    }

    /// Add a vertex holding `value`.
    pub fn vertex(&mut self, value: T) -> NodeId {
        let id = self.graph.create_node(value);
        self.graph.add_vertex(id);
        id
    }

    /// Add one vertex per value, returning their handles in order.
    pub fn vertices<I>(&mut self, values: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(|v| self.vertex(v)).collect()
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, v1: NodeId, v2: NodeId) -> &mut Self {
        self.graph.add_edge(v1, v2);
        self
    }

    /// Link consecutive handles into a path.
    pub fn chain(&mut self, ids: &[NodeId]) -> &mut Self {
        for pair in ids.windows(2) {
            if let &[a, b] = pair {
                self.graph.add_edge(a, b);
            }
        }
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<T> {
        self.graph
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
