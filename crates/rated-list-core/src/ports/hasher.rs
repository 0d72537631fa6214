//! Cryptographic hash port, consumed by custody column derivation.
//!
//! Reference: SPEC_FULL.md Section 6

/// Abstract interface over a 256-bit cryptographic hash function.
///
/// The concrete default is `adapters::sha256::Sha256Hasher`, feature-gated
/// behind `sha256` (enabled by default) so the domain layer itself carries
/// zero mandatory dependencies.
pub trait Hasher {
    fn hash(&self, input: &[u8]) -> [u8; 32];
}
