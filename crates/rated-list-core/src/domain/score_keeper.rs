//! Per-block contact/reply tallies.
//!
//! Reference: SPEC_FULL.md Section 3 (ScoreKeeper), Section 4.1

use std::collections::{BTreeMap, BTreeSet};

use super::{NodeId, SampleId};

/// Contact/reply tallies for a single `Root`. The key is an *ancestor*; the
/// value is the set of (descendant, sample) pairs for which that ancestor
/// has at least one descendant that was contacted/replied under this root.
#[derive(Debug, Clone, Default)]
pub struct ScoreKeeper {
    pub descendants_contacted: BTreeMap<NodeId, BTreeSet<(NodeId, SampleId)>>,
    pub descendants_replied: BTreeMap<NodeId, BTreeSet<(NodeId, SampleId)>>,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_contact(&mut self, ancestor: NodeId, descendant: NodeId, sample_id: SampleId) {
        self.descendants_contacted
            .entry(ancestor)
            .or_default()
            .insert((descendant, sample_id));
    }

    pub fn record_reply(&mut self, ancestor: NodeId, descendant: NodeId, sample_id: SampleId) {
        self.descendants_replied
            .entry(ancestor)
            .or_default()
            .insert((descendant, sample_id));
    }

    pub fn contacted(&self, ancestor: &NodeId) -> Option<&BTreeSet<(NodeId, SampleId)>> {
        self.descendants_contacted.get(ancestor)
    }

    pub fn replied(&self, ancestor: &NodeId) -> Option<&BTreeSet<(NodeId, SampleId)>> {
        self.descendants_replied.get(ancestor)
    }
}
