//! Custody column derivation.
//!
//! Reference: SPEC_FULL.md Section 6 (Hasher / custody derivation)

use std::collections::BTreeSet;

use crate::ports::Hasher;

use super::{NodeId, RatedListConfig, RatedListError, SampleId};

/// Derive the sorted set of sample columns a node is expected to custody.
///
/// Deterministic: repeatedly hashes a 256-bit counter seeded from `node_id`
/// (little-endian), taking the low 64 bits of each digest modulo
/// `subnet_count` to pick distinct subnet ids, until `min_custody_count`
/// distinct subnets have been found. Bounded by a safety counter on top of
/// the pigeon-hole argument (`min_custody_count <= subnet_count`); tripping
/// it is unreachable under the documented configuration.
pub fn get_custody_columns(
    hasher: &dyn Hasher,
    node_id: NodeId,
    config: &RatedListConfig,
) -> Result<Vec<SampleId>, RatedListError> {
    let mut subnet_ids: BTreeSet<u64> = BTreeSet::new();
    let mut current = node_id;
    let max_iterations = config.subnet_count.saturating_mul(4).max(1);
    let mut iterations = 0u64;

    while (subnet_ids.len() as u64) < config.min_custody_count {
        if iterations >= max_iterations {
            return Err(RatedListError::CustodyDerivationExhausted);
        }
        iterations += 1;

        let digest = hasher.hash(current.as_bytes());
        let mut low8 = [0u8; 8];
        low8.copy_from_slice(&digest[0..8]);
        let subnet_id = u64::from_le_bytes(low8) % config.subnet_count;
        subnet_ids.insert(subnet_id);

        current = current.increment_le_wrapping();
    }

    let columns_per_subnet = config.columns_per_subnet();
    let mut columns: Vec<SampleId> = Vec::with_capacity((columns_per_subnet * subnet_ids.len() as u64) as usize);
    for i in 0..columns_per_subnet {
        for &subnet_id in &subnet_ids {
            columns.push(SampleId::new(config.subnet_count * i + subnet_id));
        }
    }
    columns.sort();
    Ok(columns)
}
