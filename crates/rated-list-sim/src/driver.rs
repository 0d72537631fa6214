//! Simulation driver: binds a rated list to a fixed graph, runs the
//! request/response loop under a chosen adversary, and emits a report.
//!
//! Reference: SPEC_FULL.md Section 4.5

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use rated_list_core::{NodeId, RatedListConfig, RatedListEngine, Root, SampleId};

use crate::adversary::Adversary;
use crate::graph::{GraphPeerOracle, PeerGraph};
use crate::queue::{RequestQueue, RequestQueueItem};
use crate::report::Report;

/// Order in which a sampling round walks a sample's filtered candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStrategy {
    /// Highest score first; stop at the first successful response.
    High,
    /// Lowest score first; stop at the first successful response.
    Low,
    /// Shuffled order; stop at the first successful response.
    Random,
    /// Every candidate is queried regardless of earlier successes.
    All,
}

/// Binds a `RatedListEngine` to a fixed `PeerGraph` and drives the full
/// tree-build / attack / sampling / report pipeline for one run.
pub struct SimulationDriver {
    engine: RatedListEngine,
    graph: PeerGraph,
    seed: u64,
}

impl SimulationDriver {
    pub fn new(graph: PeerGraph, own_id: NodeId, config: RatedListConfig, hasher: Box<dyn rated_list_core::Hasher>, seed: u64) -> Self {
        Self {
            engine: RatedListEngine::new(own_id, config, hasher),
            graph,
            seed,
        }
    }

    pub fn engine(&self) -> &RatedListEngine {
        &self.engine
    }

    pub fn graph(&self) -> &PeerGraph {
        &self.graph
    }

    /// Run `setup_attack`, build the rated list, drive one full sampling
    /// round for `root` under `strategy`, and return the classification
    /// report.
    pub fn run(&mut self, adversary: &mut dyn Adversary, root: Root, strategy: QueryStrategy) -> Report {
        adversary.setup_attack(&mut self.graph);
        info!(malicious = adversary.num_attack_nodes(), "adversary configured");

        let max_children = self.engine.store().config().max_children;
        let visited = {
            let oracle = GraphPeerOracle::new(&self.graph, max_children, self.seed);
            self.engine.build_tree(&oracle)
        };
        debug!(visited, "tree builder finished");

        let number_of_columns = self.engine.store().config().number_of_columns;
        let mut obtained_samples = 0usize;
        let mut rng = StdRng::seed_from_u64(self.seed);

        for column in 0..number_of_columns {
            let sample_id = SampleId::new(column);
            let mut ordered = self.engine.filter_nodes(root, sample_id);
            order_candidates(&mut ordered, strategy, &mut rng);

            for (candidate, _score) in ordered {
                if self.engine.request_sample(root, candidate, sample_id).is_err() {
                    continue;
                }

                let mut queue = RequestQueue::new();
                queue.enqueue(RequestQueueItem {
                    root,
                    vertex: candidate,
                    sample_id,
                });
                let results = queue.drain_process(|vertex| adversary.should_respond(vertex));

                let mut got_reply = false;
                for (item, admitted) in results {
                    if admitted {
                        let _ = self.engine.receive_sample_reply(item.root, item.vertex, item.sample_id);
                        got_reply = true;
                    }
                }

                if got_reply {
                    obtained_samples += 1;
                    if strategy != QueryStrategy::All {
                        break;
                    }
                }
            }
        }

        self.build_report(adversary, root, obtained_samples, number_of_columns)
    }

    fn build_report(&self, adversary: &dyn Adversary, root: Root, obtained_samples: usize, number_of_columns: u64) -> Report {
        let malicious = adversary.get_malicious_nodes();
        let mut evicted = std::collections::BTreeSet::new();
        let mut filtered = std::collections::BTreeSet::new();

        for column in 0..number_of_columns {
            let sample_id = SampleId::new(column);
            let Some(holders) = self.engine.store().sample_holders(sample_id) else {
                continue;
            };
            let accepted = self.engine.filter_nodes(root, sample_id);
            let accepted_ids: std::collections::BTreeSet<NodeId> = accepted.iter().map(|(id, _)| *id).collect();

            for &holder in holders {
                if accepted_ids.contains(&holder) {
                    filtered.insert(holder);
                } else {
                    evicted.insert(holder);
                }
            }
        }

        let mut report = Report {
            evicted: evicted.len(),
            malicious: malicious.len(),
            filtered: filtered.len(),
            obtained_samples,
            number_of_columns: number_of_columns as usize,
            ..Default::default()
        };

        for &node_id in &evicted {
            if malicious.contains(&node_id) {
                report.true_positives += 1;
            } else {
                report.false_positives += 1;
            }
        }
        for &node_id in &filtered {
            if malicious.contains(&node_id) {
                report.false_negatives += 1;
            } else {
                report.true_negatives += 1;
            }
        }

        report
    }
}

fn order_candidates(candidates: &mut Vec<(NodeId, f64)>, strategy: QueryStrategy, rng: &mut StdRng) {
    match strategy {
        QueryStrategy::High => {
            let sorted = {
                let mut sorted = candidates.clone();
                sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
                sorted
            };
            *candidates = sorted;
        }
        QueryStrategy::Low => {
            let sorted = {
                let mut sorted = candidates.clone();
                sorted.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
                sorted
            };
            *candidates = sorted;
        }
        QueryStrategy::Random => {
            candidates.shuffle(rng);
        }
        QueryStrategy::All => {}
    }
}
