//! Eclipsing a vertex's entire neighbourhood drives its own `node_score` to
//! zero the first time one of its children is sampled and fails to reply.
//!
//! Reference: SPEC_FULL.md Section 8, "Eclipse isolation" scenario

use rated_list_core::{NodeId, RatedListConfig, Root, Sha256Hasher};
use rated_list_sim::{EclipseAttack, PeerGraph, QueryStrategy, SimulationDriver};

use crate::node;

const CHILD_COUNT: u64 = 5;

/// `own` reaches `target` through one intermediate hub `uplink`, and `target`
/// has a handful of its own children. `target`'s graph neighbourhood is
/// `{uplink} ∪ children` — `own` is two hops away, so eclipsing `target`'s
/// neighbourhood never touches `own` itself.
fn build_graph() -> (PeerGraph, NodeId, NodeId) {
    let own = node(0);
    let uplink = node(1);
    let target = node(2);
    let mut graph = PeerGraph::new();

    graph.add_edge(own, uplink);
    graph.add_edge(uplink, target);
    for i in 0..CHILD_COUNT {
        graph.add_edge(target, node(10 + i));
    }

    (graph, own, target)
}
