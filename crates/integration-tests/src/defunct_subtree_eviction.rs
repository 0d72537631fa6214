//! Defunct subtree going dark drags its own `node_score` to zero for every
//! descendant, and a full sampling round evicts the whole branch.
//!
//! Reference: SPEC_FULL.md Section 8, "Defunct subtree eviction" scenario

use rated_list_sim::{DefunctSubTreeAttack, PeerGraph, QueryStrategy, SimulationDriver};

use rated_list_core::{RatedListConfig, Root, Sha256Hasher};

use crate::node;

/// `own` has `fan` children; one of them (the "heavy" child) itself grows a
/// full two more levels of `fan` children, giving it `fan + fan*fan`
/// descendants while its siblings stay leaves. Returns the graph and the
/// heavy child's id.
///
/// With `fan = 50` the heavy child alone has 2550 descendants, comfortably
/// over the 2500-descendant scenario floor, while the total vertex count
/// (2601) stays small enough for a single-process test.
fn build_lopsided_fan_tree(fan: u64) -> (PeerGraph, rated_list_core::NodeId) {
    let own = node(0);
    let mut graph = PeerGraph::new();
    let mut next_id = 1u64;

    let mut children = Vec::with_capacity(fan as usize);
    for _ in 0..fan {
        let child = node(next_id);
        next_id += 1;
        graph.add_edge(own, child);
        children.push(child);
    }

    let heavy = children[0];
    for _ in 0..fan {
        let grandchild = node(next_id);
        next_id += 1;
        graph.add_edge(heavy, grandchild);
        for _ in 0..fan {
            let great_grandchild = node(next_id);
            next_id += 1;
            graph.add_edge(grandchild, great_grandchild);
        }
    }

    (graph, heavy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entire_defunct_branch_is_evicted_with_no_false_positives() {
        let own = node(0);
        let (graph, heavy) = build_lopsided_fan_tree(50);

        let config = RatedListConfig::default();
        let mut driver = SimulationDriver::new(graph, own, config, Box::new(Sha256Hasher), 1);
        let mut attack = DefunctSubTreeAttack::new(heavy, own);

        let root = Root::new([9u8; 32]);
        let report = driver.run(&mut attack, root, QueryStrategy::High);

        // fan + fan*fan = 50 + 2500 = 2550 descendants, plus the branch root.
        assert_eq!(attack.get_malicious_nodes().len(), 2551);
        assert!(attack.get_malicious_nodes().len() >= 2500);

        assert_eq!(report.false_positives, 0);
        assert_eq!(report.false_negatives, 0);
        assert_eq!(report.true_positives, attack.get_malicious_nodes().len());
        assert_eq!(report.false_negative_rate(), 0.0);
    }

    #[test]
    fn test_siblings_outside_the_defunct_branch_stay_honest() {
        let own = node(0);
        let (graph, heavy) = build_lopsided_fan_tree(10);
        let sibling = node(2); // a leaf child of `own`, not the heavy branch

        let config = RatedListConfig::default();
        let mut driver = SimulationDriver::new(graph, own, config, Box::new(Sha256Hasher), 2);
        let mut attack = DefunctSubTreeAttack::new(heavy, own);

        let root = Root::new([10u8; 32]);
        let _ = driver.run(&mut attack, root, QueryStrategy::High);

        assert!(!attack.get_malicious_nodes().contains(&sibling));
        assert_eq!(driver.engine().node_score(sibling, root), 1.0);
    }
}
