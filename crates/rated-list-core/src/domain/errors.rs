//! Domain errors for the rated-list store.
//!
//! Reference: SPEC_FULL.md Section 7 (Error handling design)

use std::fmt;

use super::{NodeId, Root};

/// Errors raised by rated-list store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatedListError {
    /// An operation referenced a `NodeId` not present in `nodes` where
    /// presence was required.
    UnknownNode(NodeId),
    /// Inserting a parent link would exceed `max_parents` for the child.
    TooManyParents(NodeId),
    /// Inserting a child link would exceed `max_children` for the parent.
    TooManyChildren(NodeId),
    /// A reply was recorded for an ancestor with no matching prior contact.
    /// Fatal: this is a programming error, not a network condition.
    ReplyWithoutContact { root: Root, descendant: NodeId },
    /// `get_custody_columns` exhausted its safety counter without finding
    /// enough distinct subnets. Unreachable under the documented bounds
    /// (`min_custody_count <= subnet_count`); bounded defensively anyway.
    CustodyDerivationExhausted,
    /// `b` is recorded as a child of `a` without the reciprocal parent link,
    /// or vice versa. Never returned by production code paths — the store's
    /// own operations are structured so asymmetry cannot arise — but
    /// available to `RatedListStore::verify_edge_symmetry` for property
    /// tests and debug assertions.
    EdgeAsymmetry { a: NodeId, b: NodeId },
}

impl fmt::Display for RatedListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "unknown node: {id}"),
            Self::TooManyParents(id) => write!(f, "node {id} already has the maximum number of parents"),
            Self::TooManyChildren(id) => write!(f, "node {id} already has the maximum number of children"),
            Self::ReplyWithoutContact { root, descendant } => write!(
                f,
                "reply recorded for descendant {descendant} under root {root} with no prior contact"
            ),
            Self::CustodyDerivationExhausted => {
                write!(f, "custody column derivation exhausted its safety counter")
            }
            Self::EdgeAsymmetry { a, b } => {
                write!(f, "edge asymmetry: {b} is a child of {a} without a reciprocal parent link")
            }
        }
    }
}

impl std::error::Error for RatedListError {}
