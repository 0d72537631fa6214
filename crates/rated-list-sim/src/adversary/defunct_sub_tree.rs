//! Defunct subtree attack: an entire branch of the tree stops responding.
//!
//! Reference: SPEC_FULL.md Section 4.4

use std::collections::BTreeSet;

use rated_list_core::NodeId;

use crate::graph::PeerGraph;

use super::Adversary;

const MAX_DEPTH: u32 = 3;

/// Marks every descendant of `defunct_root` up to `MAX_DEPTH`, excluding
/// `parent`, as malicious — modelling a subtree of the rated list going
/// dark (e.g. a datacenter outage) rather than active misbehaviour.
#[derive(Debug)]
pub struct DefunctSubTreeAttack {
    pub defunct_root: NodeId,
    pub parent: NodeId,
    malicious: BTreeSet<NodeId>,
}

impl DefunctSubTreeAttack {
    pub fn new(defunct_root: NodeId, parent: NodeId) -> Self {
        Self {
            defunct_root,
            parent,
            malicious: BTreeSet::new(),
        }
    }
}

impl Adversary for DefunctSubTreeAttack {
    fn setup_attack(&mut self, graph: &mut PeerGraph) {
        let mut frontier = vec![(self.defunct_root, 0u32)];
        let mut visited: BTreeSet<NodeId> = BTreeSet::new();
        visited.insert(self.defunct_root);
        self.malicious.insert(self.defunct_root);

        while let Some((current, depth)) = frontier.pop() {
            if depth >= MAX_DEPTH {
                continue;
            }
            for neighbor in graph.neighbors(current) {
                if neighbor == self.parent || visited.contains(&neighbor) {
                    continue;
                }
                visited.insert(neighbor);
                self.malicious.insert(neighbor);
                frontier.push((neighbor, depth + 1));
            }
        }
    }

    fn should_respond(&self, vertex: NodeId) -> bool {
        !self.malicious.contains(&vertex)
    }

    fn get_malicious_nodes(&self) -> BTreeSet<NodeId> {
        self.malicious.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(byte: u8) -> NodeId {
        let mut bytes = [0u8; 32];
        bytes[0] = byte;
        NodeId::new(bytes)
    }

    #[test]
    fn test_defunct_subtree_excludes_parent() {
        let parent = node(0);
        let defunct_root = node(1);
        let mut graph = PeerGraph::new();
        graph.add_edge(parent, defunct_root);
        graph.add_edge(defunct_root, node(2));

        let mut attack = DefunctSubTreeAttack::new(defunct_root, parent);
        attack.setup_attack(&mut graph);

        let malicious = attack.get_malicious_nodes();
        assert!(!malicious.contains(&parent));
        assert!(malicious.contains(&defunct_root));
        assert!(malicious.contains(&node(2)));
    }

    #[test]
    fn test_defunct_subtree_stops_at_max_depth() {
        let parent = node(0);
        let defunct_root = node(1);
        let mut graph = PeerGraph::new();
        graph.add_edge(parent, defunct_root);
        graph.add_edge(defunct_root, node(2));
        graph.add_edge(node(2), node(3));
        graph.add_edge(node(3), node(4));
        graph.add_edge(node(4), node(5));

        let mut attack = DefunctSubTreeAttack::new(defunct_root, parent);
        attack.setup_attack(&mut graph);

        let malicious = attack.get_malicious_nodes();
        assert!(malicious.contains(&node(4)));
        assert!(!malicious.contains(&node(5)));
    }
}
