//! End-to-end scenarios for the rated-list peer reputation engine.
//!
//! Each module here exercises `rated-list-core` and `rated-list-sim` together
//! through a full tree-build / attack / sampling round, per the scenarios
//! named in SPEC_FULL.md Section 8. Property-level invariants (edge
//! symmetry, score bounds, idempotence) are covered by `#[cfg(test)]` unit
//! tests co-located inside `rated-list-core` itself; this crate only covers
//! behaviour that requires the simulation driver and a concrete peer graph.

pub mod balancing_control_subtree;
pub mod custody_columns_end_to_end;
pub mod defunct_subtree_eviction;
pub mod eclipse_isolation;
pub mod filter_threshold_relaxation;
pub mod sybil_false_positive_growth;

/// Build a `NodeId` from a small vertex index, little-endian in the low
/// bytes. Shared by every scenario module so vertex numbering stays
/// consistent across the crate.
pub(crate) fn node(index: u64) -> rated_list_core::NodeId {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&index.to_le_bytes());
    rated_list_core::NodeId::new(bytes)
}
