//! Per-peer record: parent/child multi-paths in the rated-list DAG.
//!
//! Reference: SPEC_FULL.md Section 3 (NodeRecord)

use std::collections::BTreeSet;

use super::{NodeId, RatedListError};

/// A peer known to the rated list, with its neighbor sets in both
/// directions. `BTreeSet` keeps iteration deterministic, which the scoring
/// walk and the test suite both rely on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeRecord {
    pub node_id: NodeId,
    pub children: BTreeSet<NodeId>,
    pub parents: BTreeSet<NodeId>,
}

impl NodeRecord {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            children: BTreeSet::new(),
            parents: BTreeSet::new(),
        }
    }

    /// Add `child` to this record's children, enforcing `max_children`.
    /// No-op (not an error) if already present.
    pub fn try_add_child(&mut self, child: NodeId, max_children: usize) -> Result<(), RatedListError> {
        if self.children.contains(&child) {
            return Ok(());
        }
        if self.children.len() >= max_children {
            return Err(RatedListError::TooManyChildren(self.node_id));
        }
        self.children.insert(child);
        Ok(())
    }

    /// Add `parent` to this record's parents, enforcing `max_parents`.
    /// No-op (not an error) if already present.
    pub fn try_add_parent(&mut self, parent: NodeId, max_parents: usize) -> Result<(), RatedListError> {
        if self.parents.contains(&parent) {
            return Ok(());
        }
        if self.parents.len() >= max_parents {
            return Err(RatedListError::TooManyParents(self.node_id));
        }
        self.parents.insert(parent);
        Ok(())
    }
}
