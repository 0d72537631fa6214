//! Eclipse attack: isolate a target by poisoning its entire neighbourhood.
//!
//! Reference: SPEC_FULL.md Section 4.4, Section 9 open question 3

use std::collections::BTreeSet;

use rated_list_core::NodeId;

use crate::graph::PeerGraph;

use super::Adversary;

/// Marks every neighbour of `target` as malicious.
///
/// `rate` is accepted and stored, matching the source's constructor
/// signature, but is not consumed by `setup_attack`'s malicious-set
/// computation. This is deliberate, not an oversight: the eclipse set here
/// is always "target's full neighbourhood", not a sampled fraction of it.
/// Kept so a future rate-bounded eclipse variant doesn't need a breaking
/// signature change.
#[derive(Debug)]
pub struct EclipseAttack {
    pub target: NodeId,
    #[allow(dead_code)]
    pub rate: f64,
    malicious: BTreeSet<NodeId>,
}

impl EclipseAttack {
    pub fn new(target: NodeId, rate: f64) -> Self {
        Self {
            target,
            rate,
            malicious: BTreeSet::new(),
        }
    }
}

impl Adversary for EclipseAttack {
    fn setup_attack(&mut self, graph: &mut PeerGraph) {
        self.malicious = graph.neighbors(self.target).into_iter().collect();
    }

    fn should_respond(&self, vertex: NodeId) -> bool {
        !self.malicious.contains(&vertex)
    }

    fn get_malicious_nodes(&self) -> BTreeSet<NodeId> {
        self.malicious.clone()
    }
}
