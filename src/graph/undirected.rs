//! Core graph structure: a node arena plus the vertex set.

use std::collections::HashSet;

use log::{debug, warn};

use crate::types::{GraphError, GraphResult, Node, NodeId};

/// An undirected graph over values of type `T`.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Creating a node
/// only allocates it; [`add_vertex`](Self::add_vertex) makes it a member of
/// the vertex set. Adjacency is kept symmetric by
/// [`add_edge`](Self::add_edge) and [`remove_edge`](Self::remove_edge).
///
/// Handles that did not come from this graph are treated as absent: mutations
/// ignore them and traversals starting from them yield nothing.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Every node ever created, indexed by handle.
    arena: Vec<Node<T>>,
    /// Vertex set, in insertion order.
    members: Vec<NodeId>,
    /// Membership index over `members`.
    member_index: HashSet<NodeId>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            members: Vec::new(),
            member_index: HashSet::new(),
        }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            members: Vec::with_capacity(capacity),
            member_index: HashSet::with_capacity(capacity),
        }
    }

    /// Allocate a node holding `value`. It is not yet a vertex of the graph.
    pub fn create_node(&mut self, value: T) -> NodeId {
        let id = NodeId::new(self.arena.len());
        self.arena.push(Node::new(value));
        id
    }

    /// Allocate a node with an initial adjacency set.
    ///
    /// The given neighbors are recorded on the new node only; they do not get
    /// a reference back. Duplicates and unknown handles are dropped.
    pub fn create_node_with_adjacent<I>(&mut self, value: T, adjacent: I) -> NodeId
    where
        I: IntoIterator<Item = NodeId>,
    {
        let id = self.create_node(value);
        let known: Vec<NodeId> = adjacent
            .into_iter()
            .filter(|&n| self.has_node(n))
            .collect();
        if let Some(node) = self.arena.get_mut(id.index()) {
            for n in known {
                node.link(n);
            }
        }
        id
    }

    /// Insert `vertex` into the vertex set. Inserting twice is a no-op.
    pub fn add_vertex(&mut self, vertex: NodeId) {
        if !self.has_node(vertex) {
            warn!("add_vertex: {} does not belong to this graph", vertex);
            return;
        }
        if self.member_index.insert(vertex) {
            self.members.push(vertex);
        }
    }

    /// Insert every vertex of `vertices`.
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Connect `v1` and `v2`. Idempotent; `v1 == v2` makes a self-loop.
    ///
    /// Vertex-set membership is not checked.
    pub fn add_edge(&mut self, v1: NodeId, v2: NodeId) {
        if !self.has_node(v1) || !self.has_node(v2) {
            warn!("add_edge: {} or {} does not belong to this graph", v1, v2);
            return;
        }
        if let Some(node) = self.arena.get_mut(v1.index()) {
            node.link(v2);
        }
        if let Some(node) = self.arena.get_mut(v2.index()) {
            node.link(v1);
        }
        debug!("add_edge {} <-> {}", v1, v2);
    }

    /// Disconnect `v1` and `v2`. No-op when they are not connected.
    pub fn remove_edge(&mut self, v1: NodeId, v2: NodeId) {
        if let Some(node) = self.arena.get_mut(v1.index()) {
            node.unlink(v2);
        }
        if let Some(node) = self.arena.get_mut(v2.index()) {
            node.unlink(v1);
        }
        debug!("remove_edge {} <-> {}", v1, v2);
    }

    /// Remove every edge touching `vertex`, then drop it from the vertex set.
    ///
    /// The node itself stays in the arena: its handle and value remain valid
    /// and its adjacency is empty.
    pub fn remove_vertex(&mut self, vertex: NodeId) {
        let Some(node) = self.arena.get(vertex.index()) else {
            warn!("remove_vertex: {} does not belong to this graph", vertex);
            return;
        };
        // Snapshot: remove_edge mutates the list we would be walking.
        let neighbors = node.adjacent().to_vec();
        for neighbor in neighbors {
            self.remove_edge(vertex, neighbor);
        }
        if let Some(node) = self.arena.get_mut(vertex.index()) {
            node.clear_adjacent();
        }
        if self.member_index.remove(&vertex) {
            self.members.retain(|&m| m != vertex);
        }
        debug!("remove_vertex {}", vertex);
    }

    /// Whether `id` was issued by this graph.
    pub fn has_node(&self, id: NodeId) -> bool {
        id.index() < self.arena.len()
    }

    /// Whether `id` is currently in the vertex set.
    pub fn contains(&self, id: NodeId) -> bool {
        self.member_index.contains(&id)
    }

    /// Get a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id.index())
    }

    /// Get a node by handle (mutable).
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.arena.get_mut(id.index())
    }

    /// Get a node by handle, failing with [`GraphError::NodeNotFound`].
    pub fn try_node(&self, id: NodeId) -> GraphResult<&Node<T>> {
        self.node(id).ok_or(GraphError::NodeNotFound(id))
    }

    /// The value stored at `id`.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }

    /// Neighbors of `id` in insertion order; empty for unknown handles.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::adjacent).unwrap_or(&[])
    }

    /// Whether `v2` is in the adjacency set of `v1`.
    pub fn is_adjacent(&self, v1: NodeId, v2: NodeId) -> bool {
        self.node(v1).is_some_and(|n| n.is_adjacent(v2))
    }

    /// The vertex set, in insertion order.
    pub fn vertices(&self) -> &[NodeId] {
        &self.members
    }

    /// Number of vertices in the vertex set.
    pub fn node_count(&self) -> usize {
        self.members.len()
    }

    /// Number of nodes ever allocated, including removed ones.
    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.arena
            .iter()
            .enumerate()
            .map(|(i, node)| {
                node.adjacent()
                    .iter()
                    .filter(|n| n.index() >= i)
                    .count()
            })
            .sum()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
