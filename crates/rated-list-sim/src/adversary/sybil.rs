//! Sybil attack: flood the graph with malicious vertices and fresh edges.
//!
//! Reference: SPEC_FULL.md Section 4.4

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use rated_list_core::NodeId;

use crate::graph::PeerGraph;

use super::Adversary;

/// Marks a `rate` fraction of the graph's vertices as malicious and gives
/// each one 1-5 fresh edges to random vertices, amplifying their in-degree
/// to increase selection probability. Must run before the tree is built: it
/// mutates the graph the peer oracle reads from.
#[derive(Debug)]
pub struct SybilAttack {
    rate: f64,
    seed: u64,
    malicious: BTreeSet<NodeId>,
}

impl SybilAttack {
    pub fn new(rate: f64, seed: u64) -> Self {
        Self {
            rate,
            seed,
            malicious: BTreeSet::new(),
        }
    }
}

impl Adversary for SybilAttack {
    fn setup_attack(&mut self, graph: &mut PeerGraph) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut vertices: Vec<NodeId> = graph.vertices().collect();
        vertices.sort();
        vertices.shuffle(&mut rng);

        let count = ((vertices.len() as f64) * self.rate).floor() as usize;
        let sybils: Vec<NodeId> = vertices.iter().take(count).copied().collect();

        for &sybil in &sybils {
            self.malicious.insert(sybil);
            let extra_edges = rng.gen_range(1..=5);
            for _ in 0..extra_edges {
                if let Some(&target) = vertices.choose(&mut rng) {
                    graph.add_edge(sybil, target);
                }
            }
        }
    }

    fn should_respond(&self, vertex: NodeId) -> bool {
        !self.malicious.contains(&vertex)
    }

    fn get_malicious_nodes(&self) -> BTreeSet<NodeId> {
        self.malicious.clone()
    }
}
