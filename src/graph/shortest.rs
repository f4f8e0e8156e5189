//! Breadth-first shortest path.

use log::debug;

use crate::types::NodeId;

use super::Graph;

impl<T> Graph<T> {
    /// Values along a path from `start` to `end`, both inclusive.
    ///
    /// Returns an empty vector when `end` is unreachable, when either handle
    /// is unknown, and when `start == end`.
    ///
    /// The path is rebuilt by walking the breadth-first order backwards from
    /// `end`, stepping to any earlier node adjacent to the current one and
    /// closing the path as soon as the current node touches `start`. When
    /// several shortest paths exist this picks the latest-discovered
    /// predecessor, not the BFS parent.
    pub fn bfs_shortest(&self, start: NodeId, end: NodeId) -> Vec<&T> {
        self.values_of(self.bfs_shortest_nodes(start, end))
    }

    /// Handles along the path computed by [`bfs_shortest`](Self::bfs_shortest).
    pub fn bfs_shortest_nodes(&self, start: NodeId, end: NodeId) -> Vec<NodeId> {
        if !self.has_node(end) {
            return Vec::new();
        }

        let traverse = self.breadth_first_search_nodes(start);
        let mut path = vec![end];
        let mut current = end;

        if let Some(end_pos) = traverse.iter().position(|&n| n == end) {
            for &candidate in traverse.iter().take(end_pos).rev() {
                if self.is_adjacent(current, start) {
                    path.push(start);
                    break;
                }
                if self.is_adjacent(current, candidate) {
                    path.push(candidate);
                    current = candidate;
                }
            }
        }

        if path.len() <= 1 {
            debug!("no path from {} to {}", start, end);
            return Vec::new();
        }
        path.reverse();
        path
    }
}
