//! Graph traversal algorithms (DFS, BFS).
//!
//! Both walks mark a node as seen when it is pushed, so every node of the
//! start's connected component is emitted exactly once and cycles terminate.
//! Neighbors are expanded in adjacency insertion order.

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::types::NodeId;

use super::Graph;

impl<T> Graph<T> {
    /// Values of the component of `start`, in depth-first order.
    ///
    /// Uses an explicit stack: the last neighbor pushed is the next visited.
    /// An isolated start yields just its own value; an unknown start yields
    /// nothing.
    pub fn depth_first_search(&self, start: NodeId) -> Vec<&T> {
        self.values_of(self.depth_first_search_nodes(start))
    }

    /// Handles of the component of `start`, in depth-first order.
    pub fn depth_first_search_nodes(&self, start: NodeId) -> Vec<NodeId> {
        if !self.has_node(start) {
            return Vec::new();
        }

        let mut order = Vec::new();
        let mut seen: HashSet<NodeId> = HashSet::from([start]);
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            order.push(current);
            for &adj in self.neighbors(current) {
                if seen.insert(adj) {
                    stack.push(adj);
                }
            }
        }

        debug!("dfs from {} visited {} nodes", start, order.len());
        order
    }

    /// Values of the component of `start`, in breadth-first order.
    pub fn breadth_first_search(&self, start: NodeId) -> Vec<&T> {
        self.values_of(self.breadth_first_search_nodes(start))
    }

    /// Handles of the component of `start`, in breadth-first order.
    ///
    /// Distance from `start` never decreases along the result; ties follow
    /// adjacency insertion order.
    pub fn breadth_first_search_nodes(&self, start: NodeId) -> Vec<NodeId> {
        if !self.has_node(start) {
            return Vec::new();
        }

        let mut order = Vec::new();
        let mut seen: HashSet<NodeId> = HashSet::from([start]);
        let mut queue: VecDeque<NodeId> = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for &adj in self.neighbors(current) {
                if seen.insert(adj) {
                    queue.push_back(adj);
                }
            }
        }

        debug!("bfs from {} visited {} nodes", start, order.len());
        order
    }

    pub(crate) fn values_of(&self, ids: Vec<NodeId>) -> Vec<&T> {
        ids.into_iter().filter_map(|id| self.value(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dfs_follows_last_pushed_neighbor() {
        // a - b, a - c, b - d
        let mut graph = Graph::new();
        let a = graph.create_node('a');
        let b = graph.create_node('b');
        let c = graph.create_node('c');
        let d = graph.create_node('d');
        graph.add_vertices([a, b, c, d]);
        graph.add_edge(a, b);
        graph.add_edge(a, c);
        graph.add_edge(b, d);

        assert_eq!(graph.depth_first_search(a), vec![&'a', &'c', &'b', &'d']);
        assert_eq!(graph.breadth_first_search(a), vec![&'a', &'b', &'c', &'d']);
    }

    #[test]
    fn cycle_terminates() {
        let mut graph = Graph::new();
        let ids: Vec<NodeId> = (0..5).map(|i| graph.create_node(i)).collect();
        for pair in ids.windows(2) {
            graph.add_edge(pair[0], pair[1]);
        }
        graph.add_edge(ids[4], ids[0]);

        assert_eq!(graph.depth_first_search_nodes(ids[0]).len(), 5);
        assert_eq!(graph.breadth_first_search_nodes(ids[0]).len(), 5);
    }

    #[test]
    fn self_loop_visits_once() {
        let mut graph = Graph::new();
        let a = graph.create_node("a");
        graph.add_edge(a, a);
        assert_eq!(graph.depth_first_search(a), vec![&"a"]);
        assert_eq!(graph.breadth_first_search(a), vec![&"a"]);
    }

    #[test]
    fn unknown_start_yields_nothing() {
        let graph: Graph<u32> = Graph::new();
        assert!(graph.depth_first_search(NodeId::new(0)).is_empty());
        assert!(graph.breadth_first_search_nodes(NodeId::new(0)).is_empty());
    }
}
