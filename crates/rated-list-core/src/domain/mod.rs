//! Pure domain layer: the rated-list graph, its scoring algorithms, and the
//! bounded-depth tree builder. No I/O, no dependency on the `ports` traits'
//! concrete implementations — only the trait definitions themselves.
//!
//! Reference: SPEC_FULL.md Section 3 (Data model), Section 4 (Operations)

mod config;
mod custody;
mod errors;
mod ids;
mod node_record;
mod rated_list;
mod score_keeper;
mod scoring;
mod tree_builder;

pub use config::RatedListConfig;
pub use custody::get_custody_columns;
pub use errors::RatedListError;
pub use ids::{NodeId, Root, SampleId};
pub use node_record::NodeRecord;
pub use rated_list::{RatedListData, RatedListStore};
pub use score_keeper::ScoreKeeper;
pub use scoring::{descendant_score, filter_nodes, node_score};
pub use tree_builder::build_tree;
