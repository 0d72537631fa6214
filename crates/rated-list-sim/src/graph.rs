//! Fixed test graph and its `PeerOracle` adapter.
//!
//! Reference: SPEC_FULL.md Section 6 (Peer oracle), Component H

use std::cell::RefCell;
use std::collections::BTreeMap;

use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use rated_list_core::NodeId;

/// An undirected peer graph over `NodeId` vertices, backed by `petgraph`.
///
/// `PeerGraph` is the sole mutable representation of "who knows whom" in a
/// simulation run; the rated list itself only ever learns about it through
/// `GraphPeerOracle::get_peers`.
#[derive(Debug, Clone, Default)]
pub struct PeerGraph {
    graph: UnGraph<NodeId, ()>,
    index_of: BTreeMap<NodeId, NodeIndex>,
}

impl PeerGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an explicit edge list, inserting vertices on first
    /// mention.
    pub fn from_edges(edges: &[(NodeId, NodeId)]) -> Self {
        let mut graph = Self::new();
        for &(a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    pub fn add_vertex(&mut self, id: NodeId) -> NodeIndex {
        *self.index_of.entry(id).or_insert_with(|| self.graph.add_node(id))
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        let ia = self.add_vertex(a);
        let ib = self.add_vertex(b);
        if ia != ib && self.graph.find_edge(ia, ib).is_none() {
            self.graph.add_edge(ia, ib, ());
        }
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index_of.contains_key(id)
    }

    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.index_of.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let Some(&idx) = self.index_of.get(&id) else {
            return Vec::new();
        };
        self.graph.neighbors(idx).map(|n| self.graph[n]).collect()
    }
}

/// `PeerOracle` adapter over a fixed `PeerGraph`, truncating and shuffling
/// neighbor lists per the port's contract.
///
/// The `RefCell<StdRng>` gives `get_peers` interior mutability despite the
/// `PeerOracle` port taking `&self` — there is exactly one simulation driver
/// per run, never shared across threads, so a plain `RefCell` suffices
/// (`rated-list-sim` does not pull in `tokio`, see SPEC_FULL.md Section 5).
pub struct GraphPeerOracle<'g> {
    graph: &'g PeerGraph,
    max_children: usize,
    rng: RefCell<StdRng>,
}

impl<'g> GraphPeerOracle<'g> {
    pub fn new(graph: &'g PeerGraph, max_children: usize, seed: u64) -> Self {
        Self {
            graph,
            max_children,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl rated_list_core::PeerOracle for GraphPeerOracle<'_> {
    fn get_peers(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut neighbors = self.graph.neighbors(node_id);
        neighbors.shuffle(&mut *self.rng.borrow_mut());
        neighbors.truncate(self.max_children);
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rated_list_core::PeerOracle;

    fn node(byte: u8) -> NodeId {
        let mut bytes = [0u8; 32];
        bytes[0] = byte;
        NodeId::new(bytes)
    }

    #[test]
    fn test_add_edge_is_symmetric_and_dedup() {
        let mut graph = PeerGraph::new();
        graph.add_edge(node(0), node(1));
        graph.add_edge(node(1), node(0));
        assert_eq!(graph.neighbors(node(0)), vec![node(1)]);
        assert_eq!(graph.neighbors(node(1)), vec![node(0)]);
    }

    #[test]
    fn test_self_loop_is_not_added() {
        let mut graph = PeerGraph::new();
        graph.add_edge(node(0), node(0));
        assert!(graph.neighbors(node(0)).is_empty());
    }

    #[test]
    fn test_oracle_truncates_to_max_children() {
        let mut graph = PeerGraph::new();
        for i in 1..10u8 {
            graph.add_edge(node(0), node(i));
        }
        let oracle = GraphPeerOracle::new(&graph, 3, 42);
        assert_eq!(oracle.get_peers(node(0)).len(), 3);
    }

    #[test]
    fn test_oracle_returns_empty_for_unknown_vertex() {
        let graph = PeerGraph::new();
        let oracle = GraphPeerOracle::new(&graph, 10, 1);
        assert!(oracle.get_peers(node(99)).is_empty());
    }
}
