//! Descendant score, node score, and the adaptive filter pass.
//!
//! Reference: SPEC_FULL.md Section 4.2

use std::collections::{BTreeMap, BTreeSet};

use super::{NodeId, RatedListStore, Root, SampleId};

/// `descendant_score(a, root)`: local reliability signal for an ancestor
/// under a given sampling context.
///
/// Optimistic by construction: an ancestor with no recorded contacts (or no
/// scorekeeper at all for `root` yet) scores `1.0`, since there is no
/// evidence against it.
pub fn descendant_score(store: &RatedListStore, ancestor: NodeId, root: Root) -> f64 {
    let Some(keeper) = store.scores(&root) else {
        return 1.0;
    };
    let Some(contacted) = keeper.contacted(&ancestor) else {
        return 1.0;
    };
    let Some(replied) = keeper.replied(&ancestor) else {
        return 0.0;
    };
    if contacted.is_empty() {
        return 1.0;
    }
    replied.len() as f64 / contacted.len() as f64
}

/// `node_score(n, root)`: best-over-paths composition of descendant scores.
///
/// Reproduces the published (and documented-odd, SPEC_FULL.md Section 9
/// open question 1) propagation exactly: the value compared against `best`
/// when a direct edge to `own_id` is found is the *child* frontier entry's
/// current score, while the value carried to the next hop is the *parent's
/// own* descendant score, not a running minimum.
pub fn node_score(store: &RatedListStore, n: NodeId, root: Root) -> f64 {
    if n == store.own_id() {
        return 1.0;
    }

    let mut frontier: BTreeMap<NodeId, f64> = BTreeMap::new();
    frontier.insert(n, descendant_score(store, n, root));

    let mut touched: BTreeSet<NodeId> = BTreeSet::new();
    let mut best = 0.0_f64;

    while !frontier.is_empty() {
        let mut next_frontier: BTreeMap<NodeId, f64> = BTreeMap::new();

        for (x, sx) in frontier {
            touched.insert(x);
            let Some(record) = store.node(&x) else {
                continue;
            };
            for &parent in &record.parents {
                if parent == store.own_id() {
                    best = best.max(sx);
                    continue;
                }
                let sp = descendant_score(store, parent, root);
                if touched.contains(&parent) {
                    continue;
                }
                let better = next_frontier.get(&parent).map(|cur| *cur < sp).unwrap_or(true);
                if better {
                    next_frontier.insert(parent, sp);
                }
            }
        }

        frontier = next_frontier;
    }

    best
}

/// `filter_nodes(root, sample_id)`: candidate set accepted for this sample
/// after the adaptive two-pass threshold filter.
///
/// Returns pairs of `(node_id, memoised_score)` in ascending `NodeId` order.
/// Empty candidate sets (no holders for `sample_id`) return an empty vec —
/// this is a recoverable condition, not an error (SPEC_FULL.md Section 7).
pub fn filter_nodes(store: &RatedListStore, root: Root, sample_id: SampleId) -> Vec<(NodeId, f64)> {
    let Some(candidates) = store.sample_holders(sample_id) else {
        return Vec::new();
    };
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut scores: BTreeMap<NodeId, f64> = BTreeMap::new();
    let mut filter_score = 0.9_f64;
    let mut filtered: BTreeSet<NodeId> = BTreeSet::new();

    for _pass in 0..2 {
        let mut evicted: BTreeSet<NodeId> = BTreeSet::new();

        for &candidate in candidates {
            let score = *scores
                .entry(candidate)
                .or_insert_with(|| node_score(store, candidate, root));

            if score >= filter_score && !evicted.contains(&candidate) {
                filtered.insert(candidate);
            } else {
                evicted.insert(candidate);
                if let Some(record) = store.node(&candidate) {
                    evicted.extend(record.children.iter().copied());
                }
            }
        }

        if !filtered.is_empty() {
            break;
        }

        let mean = scores.values().sum::<f64>() / scores.len() as f64;
        filter_score = mean - 0.1;
    }

    filtered.into_iter().map(|id| (id, scores[&id])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RatedListConfig, RatedListStore};

    fn node(byte: u8) -> NodeId {
        let mut bytes = [0u8; 32];
        bytes[0] = byte;
        NodeId::new(bytes)
    }

    fn build_chain(own: NodeId) -> RatedListStore {
        // own -> 1 -> 2
        let mut store = RatedListStore::new(own, RatedListConfig::default());
        store.on_get_peers_response(own, &[node(1)]);
        store.on_get_peers_response(node(1), &[node(2)]);
        store
    }

    #[test]
    fn test_own_node_score_is_always_one() {
        let store = build_chain(node(0));
        let root = Root::new([1u8; 32]);
        assert_eq!(node_score(&store, node(0), root), 1.0);
    }

    #[test]
    fn test_descendant_score_optimistic_without_scorekeeper() {
        let store = build_chain(node(0));
        let root = Root::new([1u8; 32]);
        assert_eq!(descendant_score(&store, node(1), root), 1.0);
    }

    #[test]
    fn test_node_score_one_before_any_contact() {
        let store = build_chain(node(0));
        let root = Root::new([1u8; 32]);
        assert_eq!(node_score(&store, node(2), root), 1.0);
    }

    #[test]
    fn test_node_score_zero_after_contact_with_no_reply() {
        let mut store = build_chain(node(0));
        let root = Root::new([1u8; 32]);
        let sample = SampleId::new(0);
        store.on_request_score_update(root, node(2), sample).unwrap();
        // node(1) was contacted (as ancestor of node(2)) but never replied.
        assert_eq!(descendant_score(&store, node(1), root), 0.0);
        assert_eq!(node_score(&store, node(2), root), 0.0);
    }

    #[test]
    fn test_node_score_one_after_contact_and_reply() {
        let mut store = build_chain(node(0));
        let root = Root::new([1u8; 32]);
        let sample = SampleId::new(0);
        store.on_request_score_update(root, node(2), sample).unwrap();
        store.on_response_score_update(root, node(2), sample).unwrap();
        assert_eq!(node_score(&store, node(2), root), 1.0);
    }

    #[test]
    fn test_filter_nodes_empty_candidate_set() {
        let store = build_chain(node(0));
        let root = Root::new([1u8; 32]);
        assert!(filter_nodes(&store, root, SampleId::new(0)).is_empty());
    }

    #[test]
    fn test_filter_nodes_second_pass_guarantees_nonempty() {
        let mut store = build_chain(node(0));
        let root = Root::new([1u8; 32]);
        let sample = SampleId::new(0);
        store.add_samples_on_entry(node(2), &[sample]);

        // Contact without reply drives node(2)'s score to 0, below 0.9.
        store.on_request_score_update(root, node(2), sample).unwrap();

        let result = filter_nodes(&store, root, sample);
        assert!(!result.is_empty());
        let (_, score) = result[0];
        let mean = 0.0; // only candidate has score 0.0
        assert!(score >= mean - 0.1);
    }

    #[test]
    fn test_filter_nodes_scores_are_not_recomputed_across_passes() {
        // A node whose score would change between "passes" (impossible here
        // since nothing mutates the store mid-call) still only gets scored
        // once; this test pins that filter_nodes scores each candidate once.
        let mut store = build_chain(node(0));
        let root = Root::new([1u8; 32]);
        let sample = SampleId::new(0);
        store.add_samples_on_entry(node(2), &[sample]);
        let result = filter_nodes(&store, root, sample);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].1, 1.0);
    }
}
