//! Peer-discovery port.
//!
//! Reference: SPEC_FULL.md Section 6

use crate::domain::NodeId;

/// Abstract interface for "get peers" queries.
///
/// The host must provide a concrete implementation (e.g. a gossip "get
/// peers" RPC, or — as `rated-list-sim` does — a fixed test graph). Results
/// should already be shuffled and truncated to `max_children`; order
/// influences which children survive when a response is trimmed.
pub trait PeerOracle {
    /// Return up to `max_children` peers known to `node_id`, shuffled.
    fn get_peers(&self, node_id: NodeId) -> Vec<NodeId>;
}
