//! Bounded-depth BFS construction of the rated list from a peer oracle.
//!
//! Reference: SPEC_FULL.md Section 4.3

use std::collections::{BTreeSet, VecDeque};

use crate::ports::{Hasher, PeerOracle};

use super::{custody::get_custody_columns, NodeId, RatedListStore};

/// Fill `store` with peers discovered transitively through `oracle`, starting
/// at `store.own_id()` and stopping at `store.config().max_tree_depth`.
///
/// Each node newly present in the store after a round of
/// `on_get_peers_response` has its custody columns registered via
/// `add_samples_on_entry`, derived with `hasher`. Returns the number of
/// distinct nodes visited (frontier nodes actually queried), for
/// logging/diagnostics.
pub fn build_tree(store: &mut RatedListStore, oracle: &dyn PeerOracle, hasher: &dyn Hasher) -> usize {
    let max_depth = store.config().max_tree_depth;
    let mut visited = 0usize;
    let mut seen: BTreeSet<NodeId> = BTreeSet::new();
    seen.insert(store.own_id());

    let mut frontier: VecDeque<(NodeId, u32)> = VecDeque::new();
    frontier.push_back((store.own_id(), 0));

    while let Some((node_id, level)) = frontier.pop_front() {
        if level >= max_depth {
            continue;
        }

        let peers = oracle.get_peers(node_id);
        visited += 1;

        let newly_seen: Vec<NodeId> = peers.iter().copied().filter(|p| !seen.contains(p)).collect();

        store.on_get_peers_response(node_id, &peers);

        for &peer in &newly_seen {
            seen.insert(peer);
            let config = store.config().clone();
            let columns = get_custody_columns(hasher, peer, &config).unwrap_or_default();
            store.add_samples_on_entry(peer, &columns);
            frontier.push_back((peer, level + 1));
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RatedListConfig;
    use crate::ports::test_support::IdentityHasher;
    use std::collections::BTreeMap;

    struct FixedOracle(BTreeMap<NodeId, Vec<NodeId>>);

    impl PeerOracle for FixedOracle {
        fn get_peers(&self, node_id: NodeId) -> Vec<NodeId> {
            self.0.get(&node_id).cloned().unwrap_or_default()
        }
    }

    fn node(byte: u8) -> NodeId {
        let mut bytes = [0u8; 32];
        bytes[0] = byte;
        NodeId::new(bytes)
    }

    #[test]
    fn test_build_tree_respects_max_depth() {
        let own = node(0);
        let mut config = RatedListConfig::default();
        config.max_tree_depth = 1;
        let mut store = RatedListStore::new(own, config);

        let mut map = BTreeMap::new();
        map.insert(own, vec![node(1)]);
        map.insert(node(1), vec![node(2)]);
        let oracle = FixedOracle(map);
        let hasher = IdentityHasher;

        build_tree(&mut store, &oracle, &hasher);

        assert!(store.contains(&node(1)));
        assert!(!store.contains(&node(2)));
    }

    #[test]
    fn test_build_tree_registers_samples_for_new_nodes() {
        let own = node(0);
        let store_config = RatedListConfig::default();
        let mut store = RatedListStore::new(own, store_config.clone());

        let mut map = BTreeMap::new();
        map.insert(own, vec![node(1)]);
        let oracle = FixedOracle(map);
        let hasher = IdentityHasher;

        build_tree(&mut store, &oracle, &hasher);

        let columns = get_custody_columns(&hasher, node(1), &store_config).unwrap();
        for column in columns {
            assert!(store.sample_holders(column).unwrap().contains(&node(1)));
        }
    }

    #[test]
    fn test_build_tree_visits_each_frontier_node_once() {
        let own = node(0);
        let mut store = RatedListStore::new(own, RatedListConfig::default());

        let mut map = BTreeMap::new();
        map.insert(own, vec![node(1), node(2)]);
        map.insert(node(1), vec![]);
        map.insert(node(2), vec![]);
        let oracle = FixedOracle(map);
        let hasher = IdentityHasher;

        let visited = build_tree(&mut store, &oracle, &hasher);
        assert_eq!(visited, 3);
    }
}
