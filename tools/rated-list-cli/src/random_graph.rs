//! Erdős–Rényi random peer graph generation.
//!
//! Out of scope per SPEC_FULL.md Section 1: the engine only ever consumes a
//! graph through the `PeerOracle` port, so the specific generation algorithm
//! is an external collaborator. Erdős–Rényi is picked here for its single
//! tunable (`edge_prob`) matching the CLI's `--edge-prob` flag.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rated_list_core::NodeId;
use rated_list_sim::PeerGraph;

/// Build a `NodeId` from a small vertex index (little-endian in the low
/// bytes, zero-padded), matching `domain::ids::NodeId`'s little-endian
/// convention.
pub fn node_id_for_index(index: usize) -> NodeId {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&(index as u64).to_le_bytes());
    NodeId::new(bytes)
}

/// Generate a `G(n, p)` Erdős–Rényi graph over vertex indices `0..n`.
pub fn erdos_renyi(n: usize, edge_prob: f64, seed: u64) -> PeerGraph {
    let mut graph = PeerGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n {
        graph.add_vertex(node_id_for_index(i));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(edge_prob) {
                graph.add_edge(node_id_for_index(i), node_id_for_index(j));
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erdos_renyi_creates_all_vertices() {
        let graph = erdos_renyi(50, 0.1, 7);
        assert_eq!(graph.vertex_count(), 50);
    }

    #[test]
    fn test_erdos_renyi_zero_probability_is_edgeless() {
        let graph = erdos_renyi(20, 0.0, 1);
        for i in 0..20 {
            assert!(graph.neighbors(node_id_for_index(i)).is_empty());
        }
    }

    #[test]
    fn test_node_id_for_index_round_trips_through_low_bytes() {
        let id = node_id_for_index(12345);
        let mut low8 = [0u8; 8];
        low8.copy_from_slice(&id.as_bytes()[..8]);
        assert_eq!(u64::from_le_bytes(low8), 12345);
    }
}
