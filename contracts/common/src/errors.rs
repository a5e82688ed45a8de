//! Error Types for the Price Attestor
//!
//! Typed, data-carrying errors for every failure path of the verifier core.
//! The core never swallows or retries a failure; each variant is surfaced to
//! the caller, who decides whether to re-fetch, abort, or alert.

/// Result type alias for attestor operations
pub type AttestResult<T> = Result<T, AttestError>;

/// Main error enum for the attestor contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttestError {
    // ============ Lifecycle Errors ============
    /// Verifier used before genesis initialization
    NotReady,

    /// Genesis initialization attempted twice
    AlreadyInitialized,

    // ============ Identity Errors ============
    /// Trusted key read from the registry differs from the genesis key.
    /// Unreachable under correct registry usage; treat as fatal.
    IdentityMismatch {
        expected: [u8; 32],
        actual: [u8; 32],
    },

    /// Public key bytes do not decode to a valid curve point
    InvalidKey { reason: &'static str },

    // ============ Verification Errors ============
    /// Signature does not verify against the trusted key and message
    InvalidSignature,

    // ============ Input Domain Errors ============
    /// Value outside the signature scheme's field domain
    DomainError {
        param: &'static str,
        reason: &'static str,
    },
}

impl AttestError {
    /// Returns a stable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotReady => "E001_NOT_READY",
            Self::AlreadyInitialized => "E002_ALREADY_INITIALIZED",
            Self::IdentityMismatch { .. } => "E010_IDENTITY_MISMATCH",
            Self::InvalidKey { .. } => "E011_INVALID_KEY",
            Self::InvalidSignature => "E020_INVALID_SIGNATURE",
            Self::DomainError { .. } => "E030_DOMAIN_ERROR",
        }
    }

    /// Returns true if the caller can fix this error and resubmit.
    ///
    /// `IdentityMismatch` is deliberately non-recoverable: it signals a
    /// violated immutability invariant, not bad input.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidSignature => true, // re-fetch from the data source
            Self::DomainError { .. } => true, // fix the input encoding
            _ => false,
        }
    }
}
