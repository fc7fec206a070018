// Rust guideline compliant 2026-10-16

//! Lifecycle graph built from the transition table.
//!
//! This module materializes the status graph as a petgraph `DiGraph` so it
//! can be audited (acyclicity, reachability) and queried for forward paths.

use crate::fsm::is_valid_transition;
use crate::Status;
use petgraph::algo::{has_path_connecting, is_cyclic_directed};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, Walker};
use std::collections::{HashMap, VecDeque};

/// Directed graph of legal status transitions.
pub struct LifecycleGraph {
    graph: DiGraph<Status, ()>,
    nodes: HashMap<Status, NodeIndex>,
}

impl LifecycleGraph {
    /// Builds the graph with one node per status and one edge per legal transition.
    pub fn new() -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::new();

        for status in Status::ALL {
            nodes.insert(status, graph.add_node(status));
        }

        for from in Status::ALL {
            for to in Status::ALL {
                if is_valid_transition(from, to) {
                    graph.add_edge(nodes[&from], nodes[&to], ());
                }
            }
        }

        Self { graph, nodes }
    }

    /// Number of legal transitions.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has an edge `from → to`.
    pub fn has_edge(&self, from: Status, to: Status) -> bool {
        self.graph.contains_edge(self.nodes[&from], self.nodes[&to])
    }

    /// Whether the lifecycle contains no cycles.
    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(&self.graph)
    }

    /// Whether `to` can be reached from `from` in zero or more transitions.
    pub fn can_reach(&self, from: Status, to: Status) -> bool {
        has_path_connecting(&self.graph, self.nodes[&from], self.nodes[&to], None)
    }

    /// Statuses reachable from `from` in one or more transitions.
    ///
    /// Results follow [`Status::ALL`] order.
    pub fn reachable_from(&self, from: Status) -> Vec<Status> {
        let start = self.nodes[&from];
        let visited: Vec<Status> = Bfs::new(&self.graph, start)
            .iter(&self.graph)
            .filter(|idx| *idx != start)
            .map(|idx| self.graph[idx])
            .collect();

        Status::ALL
            .into_iter()
            .filter(|status| visited.contains(status))
            .collect()
    }

    /// Returns the shortest legal path from `from` to `to`, both included.
    ///
    /// Returns `None` when `to` is unreachable and `Some(vec![from])` when
    /// the two are equal.
    pub fn forward_path(&self, from: Status, to: Status) -> Option<Vec<Status>> {
        let start = self.nodes[&from];
        let goal = self.nodes[&to];

        let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                let mut path = vec![self.graph[current]];
                let mut cursor = current;
                while let Some(prev) = parent.get(&cursor) {
                    path.push(self.graph[*prev]);
                    cursor = *prev;
                }
                path.reverse();
                return Some(path);
            }

            for next in self.graph.neighbors(current) {
                if next != start && !parent.contains_key(&next) {
                    parent.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}

impl Default for LifecycleGraph {
    fn default() -> Self {
        Self::new()
    }
}
