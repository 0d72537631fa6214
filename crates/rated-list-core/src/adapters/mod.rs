//! Concrete implementations of the `ports` traits.
//!
//! Reference: SPEC_FULL.md Section 6 (External interfaces)

#[cfg(feature = "sha256")]
pub mod sha256;

#[cfg(feature = "sha256")]
pub use sha256::Sha256Hasher;
