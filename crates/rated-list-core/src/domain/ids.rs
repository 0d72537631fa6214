//! Fixed-width identifiers used throughout the rated list.
//!
//! Reference: SPEC_FULL.md Section 3 (Data model)

use std::fmt;

/// 32-byte node identifier.
///
/// Hand-rolled rather than sourced from a bignum crate: the teacher's own
/// `entities.rs` represents its peer identifier the same way, and nothing
/// here needs arithmetic beyond little-endian increment-with-wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub [u8; 32]);

impl NodeId {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Increment the identifier's bytes as a little-endian 256-bit counter
    /// (SPEC_FULL.md Section 7, overflow guard).
    ///
    /// On overflow this resets to zero and then still applies the
    /// increment, landing on `1` rather than `0` — matching the reference
    /// derivation's two-step reset-then-increment (`dascore.py`), not plain
    /// modular wraparound.
    pub fn increment_le_wrapping(&self) -> Self {
        let mut out = self.0;
        let mut carry = 1u16;
        for byte in out.iter_mut() {
            let sum = *byte as u16 + carry;
            *byte = (sum & 0xff) as u8;
            carry = sum >> 8;
            if carry == 0 {
                break;
            }
        }
        if carry != 0 {
            // overflowed past the top byte: reset to zero, then the
            // increment still fires, landing on 1.
            let mut reset = [0u8; 32];
            reset[0] = 1;
            return Self(reset);
        }
        Self(out)
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..")
    }
}

/// One of `NUMBER_OF_COLUMNS` erasure-coded sample columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleId(pub u64);

impl SampleId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a sampling context, typically a block root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Root(pub [u8; 32]);

impl Root {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..")
    }
}
