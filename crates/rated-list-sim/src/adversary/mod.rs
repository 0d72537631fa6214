//! Adversary strategies driving a simulation's ground truth.
//!
//! Reference: SPEC_FULL.md Section 4.4

mod balancing;
mod defunct_sub_tree;
mod eclipse;
mod sybil;

pub use balancing::BalancingAttack;
pub use defunct_sub_tree::DefunctSubTreeAttack;
pub use eclipse::EclipseAttack;
pub use sybil::SybilAttack;

use std::collections::BTreeSet;

use rated_list_core::NodeId;

use crate::graph::PeerGraph;

/// Shared interface for adversarial node behaviour during a simulation run.
///
/// Structurally grounded in the teacher's small, object-safe port traits
/// (`NetworkSocket`, `TimeSource`): a handful of methods, no associated
/// types, `Debug` for diagnostics.
pub trait Adversary: std::fmt::Debug {
    /// Mutate or annotate `graph` to set up this attack's ground truth.
    /// Graph-extending attacks (`SybilAttack`) must run before the tree
    /// builder reads from `graph`.
    fn setup_attack(&mut self, graph: &mut PeerGraph);

    /// `true` ⇒ `vertex` is honest and responds to a sample request.
    /// `false` ⇒ `vertex` is malicious and stays silent.
    fn should_respond(&self, vertex: NodeId) -> bool;

    /// The full set of vertices this attack marked malicious.
    fn get_malicious_nodes(&self) -> BTreeSet<NodeId>;

    /// Number of malicious vertices, for reporting.
    fn num_attack_nodes(&self) -> usize {
        self.get_malicious_nodes().len()
    }
}
