//! Core Types for the Price Attestor
//!
//! The fundamental data structures shared by the attestor contracts: field
//! elements (the domain of every signed value), the transient oracle update,
//! and the detached attestation signature.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::signature;
use crate::errors::{AttestError, AttestResult};
use crate::validation::{decimal_256, is_canonical_field_bytes, parse_decimal_256};

/// Type alias for compressed Ed25519 public keys
pub type PublicKeyBytes = [u8; 32];

/// Type alias for key fingerprints (SHA-256 of the key bytes)
pub type KeyFingerprint = [u8; 32];

/// Computes the SHA-256 fingerprint of a public key.
///
/// Used as a stable identity handle in logs and event streams, so the full
/// key never needs to travel with every record.
pub fn key_fingerprint(key: &PublicKeyBytes) -> KeyFingerprint {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(key);
    hasher.finalize().into()
}

// ============ Field Elements ============

/// A canonical element of the Ed25519 base field, little-endian.
///
/// Every signed value (price, timestamp) is a field element: a non-negative
/// integer strictly below `2^255 - 19`. The bound is enforced at
/// construction, so a held `FieldElement` is always in-domain.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Hash,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct FieldElement([u8; 32]);

impl FieldElement {
    /// The zero element
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates a field element from a `u64`. Always in-domain.
    pub const fn from_u64(value: u64) -> Self {
        let le = value.to_le_bytes();
        let mut bytes = [0u8; 32];
        let mut i = 0;
        while i < 8 {
            bytes[i] = le[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Creates a field element from canonical little-endian bytes.
    ///
    /// # Errors
    /// `DomainError` if the value is not below the field modulus.
    pub fn from_le_bytes(bytes: [u8; 32]) -> AttestResult<Self> {
        if !is_canonical_field_bytes(&bytes) {
            return Err(AttestError::DomainError {
                param: "field_element",
                reason: "not below the field modulus",
            });
        }
        Ok(Self(bytes))
    }

    /// Parses the decimal integer string format used by the upstream feed.
    ///
    /// # Errors
    /// `DomainError` on non-digit input, 256-bit overflow, or an
    /// out-of-domain value.
    pub fn from_decimal_str(s: &str) -> AttestResult<Self> {
        let bytes = parse_decimal_256(s).ok_or(AttestError::DomainError {
            param: "field_element",
            reason: "not a 256-bit decimal integer",
        })?;
        Self::from_le_bytes(bytes)
    }

    /// Returns the canonical little-endian encoding.
    pub const fn to_le_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Returns the value as `u64` if it fits, `None` otherwise.
    pub fn as_u64(&self) -> Option<u64> {
        if self.0[8..].iter().any(|b| *b != 0) {
            return None;
        }
        let mut le = [0u8; 8];
        le.copy_from_slice(&self.0[..8]);
        Some(u64::from_le_bytes(le))
    }
}

impl Ord for FieldElement {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Little-endian: compare from the most significant byte down
        for i in (0..32).rev() {
            match self.0[i].cmp(&other.0[i]) {
                core::cmp::Ordering::Equal => continue,
                ord => return ord,
            }
        }
        core::cmp::Ordering::Equal
    }
}

impl PartialOrd for FieldElement {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl core::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&decimal_256(&self.0))
    }
}

// ============ Oracle Update ============

/// A candidate oracle update, constructed transiently per submission.
///
/// Never persisted as-is: it either passes verification and its `value`
/// becomes the new committed state, or it is dropped without trace.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct OracleUpdate {
    /// The attested price value
    pub value: FieldElement,
    /// The provider's timestamp for the value
    pub timestamp: FieldElement,
}

impl OracleUpdate {
    /// Creates an update from already in-domain field elements.
    pub const fn new(value: FieldElement, timestamp: FieldElement) -> Self {
        Self { value, timestamp }
    }

    /// Returns the canonical signing payload: value bytes then timestamp
    /// bytes, both little-endian. This is the exact message the trusted
    /// provider signs off-chain.
    pub fn message_bytes(&self) -> [u8; signature::MESSAGE_LEN] {
        let mut msg = [0u8; signature::MESSAGE_LEN];
        msg[..32].copy_from_slice(&self.value.to_le_bytes());
        msg[32..].copy_from_slice(&self.timestamp.to_le_bytes());
        msg
    }
}

// ============ Attestation Signature ============

/// A detached Ed25519 signature over an update's message bytes.
///
/// Kept as the wire `(r, s)` pair. Components span the full 256-bit range:
/// `r` is a compressed curve point whose top bit carries the sign of x, so
/// it is deliberately not a `FieldElement`. Consumed once per verification,
/// never stored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct AttestationSignature {
    /// Compressed nonce point `R`
    pub r: [u8; 32],
    /// Scalar `s`
    pub s: [u8; 32],
}

impl AttestationSignature {
    /// Creates a signature from its raw components.
    pub const fn from_parts(r: [u8; 32], s: [u8; 32]) -> Self {
        Self { r, s }
    }

    /// Creates a signature from a 64-byte `R || s` encoding.
    pub fn from_bytes(bytes: [u8; signature::SIGNATURE_LEN]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Self { r, s }
    }

    /// Parses the decimal `r`/`s` strings used by the upstream feed.
    ///
    /// # Errors
    /// `DomainError` if either component is not a 256-bit decimal integer.
    pub fn from_decimal_parts(r: &str, s: &str) -> AttestResult<Self> {
        let r = parse_decimal_256(r).ok_or(AttestError::DomainError {
            param: "signature.r",
            reason: "not a 256-bit decimal integer",
        })?;
        let s = parse_decimal_256(s).ok_or(AttestError::DomainError {
            param: "signature.s",
            reason: "not a 256-bit decimal integer",
        })?;
        Ok(Self { r, s })
    }

    /// Returns the 64-byte `R || s` encoding.
    pub fn to_bytes(self) -> [u8; signature::SIGNATURE_LEN] {
        let mut bytes = [0u8; signature::SIGNATURE_LEN];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..].copy_from_slice(&self.s);
        bytes
    }
}
