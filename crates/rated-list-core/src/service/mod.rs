//! Driving-side facade over the rated-list domain.
//!
//! Reference: SPEC_FULL.md Section 2 (Control flow)

use crate::domain::{
    build_tree, descendant_score, filter_nodes, get_custody_columns, node_score, NodeId,
    RatedListConfig, RatedListError, RatedListStore, Root, SampleId,
};
use crate::ports::{Hasher, PeerOracle};

/// Primary API for interacting with a rated list.
///
/// Wraps a `RatedListStore` and a `Box<dyn Hasher>` so callers don't have to
/// thread a hasher reference through every custody-derivation call.
pub struct RatedListEngine {
    pub(crate) store: RatedListStore,
    pub(crate) hasher: Box<dyn Hasher>,
}

impl RatedListEngine {
    pub fn new(own_id: NodeId, config: RatedListConfig, hasher: Box<dyn Hasher>) -> Self {
        Self {
            store: RatedListStore::new(own_id, config),
            hasher,
        }
    }

    pub fn store(&self) -> &RatedListStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RatedListStore {
        &mut self.store
    }

    /// Fill the rated list by querying `oracle` up to `config().max_tree_depth`.
    pub fn build_tree(&mut self, oracle: &dyn PeerOracle) -> usize {
        build_tree(&mut self.store, oracle, self.hasher.as_ref())
    }

    /// Derive the custody columns `node_id` is expected to serve.
    pub fn custody_columns(&self, node_id: NodeId) -> Result<Vec<SampleId>, RatedListError> {
        get_custody_columns(self.hasher.as_ref(), node_id, self.store.config())
    }

    pub fn descendant_score(&self, ancestor: NodeId, root: Root) -> f64 {
        descendant_score(&self.store, ancestor, root)
    }

    pub fn node_score(&self, n: NodeId, root: Root) -> f64 {
        node_score(&self.store, n, root)
    }

    pub fn filter_nodes(&self, root: Root, sample_id: SampleId) -> Vec<(NodeId, f64)> {
        filter_nodes(&self.store, root, sample_id)
    }

    pub fn request_sample(&mut self, root: Root, node_id: NodeId, sample_id: SampleId) -> Result<(), RatedListError> {
        self.store.on_request_score_update(root, node_id, sample_id)
    }

    pub fn receive_sample_reply(&mut self, root: Root, node_id: NodeId, sample_id: SampleId) -> Result<(), RatedListError> {
        self.store.on_response_score_update(root, node_id, sample_id)
    }
}
