//! # Rated-List Simulation
//!
//! Adversary models, a fixed peer-graph `PeerOracle` adapter, and a
//! simulation driver for exercising `rated-list-core`'s peer-selection
//! policy under Sybil, Eclipse, Balancing, and defunct-subtree attacks.

pub mod adversary;
pub mod driver;
pub mod graph;
pub mod queue;
pub mod report;

pub use adversary::{Adversary, BalancingAttack, DefunctSubTreeAttack, EclipseAttack, SybilAttack};
pub use driver::{QueryStrategy, SimulationDriver};
pub use graph::{GraphPeerOracle, PeerGraph};
pub use queue::{RequestQueue, RequestQueueItem};
pub use report::Report;
