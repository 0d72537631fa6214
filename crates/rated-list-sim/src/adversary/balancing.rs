//! Balancing attack: poison a fraction of each visited node's neighbours
//! along a subtree, leaving a sibling subtree honest as a control.
//!
//! Reference: SPEC_FULL.md Section 4.4

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use rated_list_core::NodeId;

use crate::graph::PeerGraph;

use super::Adversary;

const POISON_FRACTION: f64 = 0.3;
const MAX_DEPTH: u32 = 3;

/// Picks a random neighbour of `root_node` as the honest subtree head, then
/// recursively poisons `POISON_FRACTION` of each visited node's neighbours
/// up to `MAX_DEPTH`, leaving the honest head's own subtree untouched as a
/// control group (SPEC_FULL.md Section 8: "Balancing attack" scenario
/// compares eviction fractions between the two subtrees).
#[derive(Debug)]
pub struct BalancingAttack {
    pub root_node: NodeId,
    seed: u64,
    honest_head: Option<NodeId>,
    malicious: BTreeSet<NodeId>,
}

impl BalancingAttack {
    pub fn new(root_node: NodeId, seed: u64) -> Self {
        Self {
            root_node,
            seed,
            honest_head: None,
            malicious: BTreeSet::new(),
        }
    }

    pub fn honest_head(&self) -> Option<NodeId> {
        self.honest_head
    }

    fn poison_subtree(&mut self, start: NodeId, graph: &PeerGraph, rng: &mut StdRng) {
        let mut frontier = vec![(start, 0u32)];
        let mut visited: BTreeSet<NodeId> = BTreeSet::new();
        visited.insert(start);

        while let Some((current, depth)) = frontier.pop() {
            if depth >= MAX_DEPTH {
                continue;
            }
            let mut neighbors = graph.neighbors(current);
            neighbors.retain(|n| *n != self.root_node && !visited.contains(n));
            neighbors.shuffle(rng);

            let poison_count = ((neighbors.len() as f64) * POISON_FRACTION).ceil() as usize;
            for &n in neighbors.iter().take(poison_count) {
                self.malicious.insert(n);
                visited.insert(n);
                frontier.push((n, depth + 1));
            }
        }
    }
}

impl Adversary for BalancingAttack {
    fn setup_attack(&mut self, graph: &mut PeerGraph) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut neighbors = graph.neighbors(self.root_node);
        neighbors.sort();
        neighbors.shuffle(&mut rng);

        let Some(&head) = neighbors.first() else {
            return;
        };
        self.honest_head = Some(head);

        for &subtree_root in neighbors.iter().skip(1) {
            self.poison_subtree(subtree_root, graph, &mut rng);
        }
    }

    fn should_respond(&self, vertex: NodeId) -> bool {
        !self.malicious.contains(&vertex)
    }

    fn get_malicious_nodes(&self) -> BTreeSet<NodeId> {
        self.malicious.clone()
    }
}
