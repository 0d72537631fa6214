//! FIFO request queue decoupling "issue" from "process" within one
//! sampling step.
//!
//! Reference: SPEC_FULL.md Section 4.5, Section 5 (ordering guarantees)

use std::collections::VecDeque;

use rated_list_core::{NodeId, Root, SampleId};

/// One outstanding sample request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestQueueItem {
    pub root: Root,
    pub vertex: NodeId,
    pub sample_id: SampleId,
}

/// A plain FIFO of outstanding requests for a single sampling wave.
#[derive(Debug, Default)]
pub struct RequestQueue {
    items: VecDeque<RequestQueueItem>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, item: RequestQueueItem) {
        self.items.push_back(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drain the queue in FIFO order, applying `admit` (the adversary's
    /// `should_respond`) to each item. Returns each item paired with
    /// whether it was admitted.
    pub fn drain_process(&mut self, mut admit: impl FnMut(NodeId) -> bool) -> Vec<(RequestQueueItem, bool)> {
        let mut results = Vec::with_capacity(self.items.len());
        while let Some(item) = self.items.pop_front() {
            let admitted = admit(item.vertex);
            results.push((item, admitted));
        }
        results
    }
}
