//! When every custodian of a sample scores below the 0.9 first-pass
//! threshold, the second pass relaxes to `mean - 0.1` rather than returning
//! nothing.
//!
//! Reference: SPEC_FULL.md Section 8, "Filter threshold relaxation" scenario

use rated_list_core::{NodeId, RatedListConfig, RatedListEngine, Root, SampleId, Sha256Hasher};
use rated_list_sim::{GraphPeerOracle, PeerGraph};

use crate::node;

/// `own` with three direct children, all custodying the same sample column.
fn build_engine_with_shared_custodians() -> (RatedListEngine, [NodeId; 3]) {
    let own = node(0);
    let candidates = [node(1), node(2), node(3)];

    let mut graph = PeerGraph::new();
    for &c in &candidates {
        graph.add_edge(own, c);
    }

    let config = RatedListConfig::default();
    let mut engine = RatedListEngine::new(own, config, Box::new(Sha256Hasher));
    let oracle = GraphPeerOracle::new(&graph, 100, 1);
    engine.build_tree(&oracle);

    (engine, candidates)
}
