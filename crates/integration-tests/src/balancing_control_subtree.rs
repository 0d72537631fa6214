//! Balancing attack: a poisoned sibling branch's collateral damage spreads
//! to its whole subtree, while the untouched honest-head branch stays clean.
//!
//! Reference: SPEC_FULL.md Section 8, "Balancing attack" scenario
//!
//! `BalancingAttack`'s `root_node` must be `own` itself for the comparison to
//! be meaningful: `node_score`'s best-over-paths propagation (SPEC_FULL.md
//! Section 9 open question 1) collapses to the descendant score of whichever
//! node is a *direct* child of `own_id` on a given path, so only branches
//! rooted one hop from `own` get independently distinguishable scores.
//!
//! Each branch gets a wide fan (300 children) so most of the 128 sample
//! columns have several holders drawn from more than one branch — with a
//! small fan, many columns would have exactly one holder, and
//! `filter_nodes`'s second-pass nonempty guarantee would let that lone
//! holder through regardless of its score, masking the effect this scenario
//! is meant to exercise.

use std::collections::BTreeMap;

use rated_list_core::{NodeId, RatedListConfig, Root, Sha256Hasher};
use rated_list_sim::{BalancingAttack, PeerGraph, QueryStrategy, SimulationDriver};

use crate::node;

const BRANCH_COUNT: u64 = 5;
const FAN: u64 = 300;

fn build_graph() -> (PeerGraph, NodeId, BTreeMap<NodeId, Vec<NodeId>>) {
    let own = node(0);
    let mut graph = PeerGraph::new();
    let mut branch_children: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();

    for branch in 1..=BRANCH_COUNT {
        let branch_root = node(branch);
        graph.add_edge(own, branch_root);

        let base = 10 + (branch - 1) * FAN;
        let mut children = Vec::with_capacity(FAN as usize);
        for offset in 0..FAN {
            let child = node(base + offset);
            graph.add_edge(branch_root, child);
            children.push(child);
        }
        branch_children.insert(branch_root, children);
    }

    (graph, own, branch_children)
}

fn fraction_evicted(driver: &SimulationDriver, root: Root, children: &[NodeId]) -> f64 {
    let evicted = children.iter().filter(|&&c| driver.engine().node_score(c, root) < 0.9).count();
    evicted as f64 / children.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisoned_branch_evicts_a_larger_fraction_than_the_honest_head() {
        let (graph, own, branch_children) = build_graph();

        let config = RatedListConfig::default();
        let mut driver = SimulationDriver::new(graph, own, config, Box::new(Sha256Hasher), 11);
        let mut attack = BalancingAttack::new(own, 11);

        let root = Root::new([55u8; 32]);
        let _report = driver.run(&mut attack, root, QueryStrategy::All);

        let head = attack.honest_head().expect("own has neighbours, a head must be chosen");
        let poisoned_branch = branch_children.keys().find(|&&b| b != head).copied().expect("at least one poisoned branch exists");

        let honest_fraction = fraction_evicted(&driver, root, &branch_children[&head]);
        let poisoned_fraction = fraction_evicted(&driver, root, &branch_children[&poisoned_branch]);

        assert!(honest_fraction < 0.05, "honest head branch should stay essentially untouched, got {honest_fraction}");
        assert!(poisoned_fraction > honest_fraction, "poisoned branch ({poisoned_fraction}) should evict more than the honest head ({honest_fraction})");
        assert!(poisoned_fraction > 0.5, "poisoned branch's collateral eviction should cover most of its subtree, got {poisoned_fraction}");
    }
}
