//! Node handles and the vertex struct stored in the graph arena.

use std::fmt;

use serde::Serialize;

/// Stable handle to a node in a [`Graph`](crate::graph::Graph) arena.
///
/// Handles stay valid for the lifetime of the graph that issued them, even
/// after the node is removed from the vertex set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of this node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex: an opaque value plus the handles of its neighbors.
///
/// The adjacency set keeps insertion order and never holds duplicates.
/// It is a plain list, so membership checks and removals cost O(degree).
/// Identity is the node's [`NodeId`]; the value plays no part in it.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    adjacent: Vec<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            adjacent: Vec::new(),
        }
    }

    /// The payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the payload.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Neighbor handles in insertion order.
    pub fn adjacent(&self) -> &[NodeId] {
        &self.adjacent
    }

    /// Whether `other` is in this node's adjacency set.
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.adjacent.contains(&other)
    }

    /// Number of neighbors.
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Insert `other`, returns false if it was already present.
    pub(crate) fn link(&mut self, other: NodeId) -> bool {
        if self.is_adjacent(other) {
            return false;
        }
        self.adjacent.push(other);
        true
    }

    /// Remove `other`, returns false if it was not present.
    pub(crate) fn unlink(&mut self, other: NodeId) -> bool {
        match self.adjacent.iter().position(|&n| n == other) {
            Some(pos) => {
                self.adjacent.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_adjacent(&mut self) {
        self.adjacent.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_idempotent() {
        let mut node = Node::new("a");
        assert!(node.link(NodeId::new(1)));
        assert!(!node.link(NodeId::new(1)));
        assert_eq!(node.degree(), 1);
    }

    #[test]
    fn unlink_missing_is_noop() {
        let mut node = Node::new(0u8);
        node.link(NodeId::new(2));
        assert!(!node.unlink(NodeId::new(3)));
        assert!(node.unlink(NodeId::new(2)));
        assert!(node.adjacent().is_empty());
    }

    #[test]
    fn value_mut_updates_payload() {
        let mut node = Node::new(String::from("old"));
        node.value_mut().push_str("-new");
        assert_eq!(node.value(), "old-new");
    }

    #[test]
    fn serializes_as_bare_index() {
        let json = serde_json::to_string(&NodeId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn adjacency_keeps_insertion_order() {
        let mut node = Node::new(());
        for i in [4, 1, 3] {
            node.link(NodeId::new(i));
        }
        let order: Vec<usize> = node.adjacent().iter().map(|n| n.index()).collect();
        assert_eq!(order, vec![4, 1, 3]);
    }
}
