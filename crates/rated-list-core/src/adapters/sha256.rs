//! SHA-256 `Hasher` adapter, feature-gated behind `sha256` (default-on).
//!
//! Reference: SPEC_FULL.md Section 6 (Hasher / custody derivation)

use sha2::{Digest, Sha256};

use crate::ports::Hasher;

/// Default custody-derivation hasher.
///
/// SHA-256 is fixed as the concrete adapter because it is what the
/// custody-derivation history this engine descends from specifies; the
/// `domain` layer itself never names it directly, only through the
/// `Hasher` port.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn hash(&self, input: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(input);
        hasher.finalize().into()
    }
}
