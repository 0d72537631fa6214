//! # Rated-List Peer Reputation Engine
//!
//! This crate implements the rated-list graph, per-block scoring engine, and
//! bounded-depth tree builder used to select peers for data-availability
//! sample requests in a gossip-based peer-to-peer network.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** pure graph, scoring, and custody-derivation logic
//! - **Ports Layer:** trait definitions for the hash function and peer oracle
//! - **Adapters Layer:** concrete implementations (`Sha256Hasher`)
//! - **Service Layer:** `RatedListEngine`, the driving-side facade
//!
//! ## Example
//!
//! ```rust
//! use rated_list_core::domain::{NodeId, RatedListConfig};
//! use rated_list_core::adapters::Sha256Hasher;
//! use rated_list_core::service::RatedListEngine;
//!
//! let own_id = NodeId::new([0u8; 32]);
//! let config = RatedListConfig::default();
//! let engine = RatedListEngine::new(own_id, config, Box::new(Sha256Hasher));
//! assert!(engine.store().contains(&own_id));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{
    build_tree, descendant_score, filter_nodes, get_custody_columns, node_score, NodeId,
    NodeRecord, RatedListConfig, RatedListData, RatedListError, RatedListStore, Root, SampleId,
    ScoreKeeper,
};

pub use ports::{Hasher, PeerOracle};

pub use service::RatedListEngine;

#[cfg(feature = "sha256")]
pub use adapters::Sha256Hasher;
