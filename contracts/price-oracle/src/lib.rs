//! Price Oracle Verifier Contract
//!
//! Admits a `(value, timestamp)` oracle update into durable state only when
//! it carries a valid Ed25519 signature from the trusted data provider.
//!
//! ## Trust Model
//!
//! One provider key per instance, fixed at genesis. There is no key-rotation
//! path: rotating the provider means deploying a new instance.
//!
//! ## Known Gap: No Replay Protection
//!
//! The verifier enforces neither timestamp monotonicity nor signature
//! uniqueness. A valid old triple resubmitted later is accepted again,
//! recommits the same value, and emits a fresh event pair. Callers that need
//! replay protection must layer it on top.

use borsh::{BorshDeserialize, BorshSerialize};
use ed25519_dalek::{Signature, VerifyingKey};
use serde::{Deserialize, Serialize};

use attestor_common::{
    check,
    constants::genesis,
    errors::{AttestError, AttestResult},
    events::{EventLog, OracleEvent},
    types::{
        key_fingerprint, AttestationSignature, FieldElement, KeyFingerprint, OracleUpdate,
        PublicKeyBytes,
    },
};

// ============ Identity Registry ============

/// Holds the single trusted oracle public key, fixed at genesis.
///
/// No update path exists by design; removing key rotation removes the whole
/// class of rotation races at the cost of redeployment being the only
/// rotation mechanism.
#[derive(Debug, Clone)]
pub struct IdentityRegistry {
    key_bytes: PublicKeyBytes,
    verifying_key: VerifyingKey,
}

impl IdentityRegistry {
    /// Creates a registry around a validated provider key.
    ///
    /// # Errors
    /// `InvalidKey` if the bytes do not decompress to a curve point or the
    /// point has small order (signatures by such keys are forgeable).
    pub fn new(public_key: PublicKeyBytes) -> AttestResult<Self> {
        let verifying_key =
            VerifyingKey::from_bytes(&public_key).map_err(|_| AttestError::InvalidKey {
                reason: "not a valid compressed curve point",
            })?;
        if verifying_key.is_weak() {
            return Err(AttestError::InvalidKey {
                reason: "small-order point",
            });
        }
        Ok(Self {
            key_bytes: public_key,
            verifying_key,
        })
    }

    /// The trusted key bytes. Pure read; identical for the instance lifetime.
    pub fn trusted_key(&self) -> PublicKeyBytes {
        self.key_bytes
    }

    /// The parsed verifying key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// SHA-256 fingerprint of the trusted key, for logs and dashboards.
    pub fn fingerprint(&self) -> KeyFingerprint {
        key_fingerprint(&self.key_bytes)
    }
}

// ============ Committed State ============

/// The durable state owned by the verifier.
///
/// `current_value` always equals the value of the most recently *accepted*
/// update; rejected updates never touch it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct CommittedState {
    /// Last accepted value; zero at genesis
    pub current_value: FieldElement,
}

impl CommittedState {
    /// State immediately after genesis.
    pub fn at_genesis() -> Self {
        Self {
            current_value: FieldElement::from_u64(genesis::INITIAL_VALUE),
        }
    }
}

// ============ Pure Verification ============

/// Checks whether `signature` is a valid signature by `key` over the
/// update's message bytes. A pure boolean predicate: valid or invalid, no
/// partial credit, no side effects.
///
/// Exposed separately from [`OracleVerifier::submit`] so callers can run the
/// expensive check off the commit path; only the commit itself must be
/// serialized.
pub fn verify_detached(
    key: &VerifyingKey,
    update: &OracleUpdate,
    signature: &AttestationSignature,
) -> bool {
    let sig = Signature::from_bytes(&signature.to_bytes());
    key.verify_strict(&update.message_bytes(), &sig).is_ok()
}

// ============ Oracle Verifier ============

/// The verification-and-commit state machine.
///
/// Two states, `Uninitialized` and `Ready`. [`initialize`] performs the
/// single transition (zeroing the committed value and fixing the trusted
/// key); `Ready` is terminal and every [`submit`] self-loops on it.
///
/// `submit` takes `&mut self`, so the read-verify-write sequence is
/// exclusive: a reader observes either the pre-update or the post-update
/// value, never an intermediate one. A submission either completes fully
/// (verify, commit, emit) or fails before any mutation.
///
/// [`initialize`]: OracleVerifier::initialize
/// [`submit`]: OracleVerifier::submit
#[derive(Debug, Clone, Default)]
pub struct OracleVerifier {
    registry: Option<IdentityRegistry>,
    /// Copy of the key captured at genesis, re-affirmed on every submit
    genesis_key: Option<PublicKeyBytes>,
    committed: CommittedState,
    events: EventLog,
}

impl OracleVerifier {
    /// Creates an uninitialized verifier. Everything except
    /// [`initialize`](Self::initialize) fails with `NotReady` until genesis.
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot constructor: a verifier already past genesis.
    pub fn genesis(public_key: PublicKeyBytes) -> AttestResult<Self> {
        let mut verifier = Self::new();
        verifier.initialize(public_key)?;
        Ok(verifier)
    }

    /// Performs the single `Uninitialized -> Ready` transition: validates
    /// and fixes the trusted key, and sets the committed value to zero.
    ///
    /// # Errors
    /// `AlreadyInitialized` on any call after the first;
    /// `InvalidKey` if the key bytes are unusable.
    pub fn initialize(&mut self, public_key: PublicKeyBytes) -> AttestResult<()> {
        check!(self.registry.is_none(), AttestError::AlreadyInitialized);

        let registry = IdentityRegistry::new(public_key)?;
        self.genesis_key = Some(registry.trusted_key());
        self.registry = Some(registry);
        self.committed = CommittedState::at_genesis();
        Ok(())
    }

    /// Returns true once genesis has run.
    pub fn is_ready(&self) -> bool {
        self.registry.is_some()
    }

    /// The trusted provider key.
    ///
    /// # Errors
    /// `NotReady` before genesis.
    pub fn trusted_key(&self) -> AttestResult<PublicKeyBytes> {
        self.registry
            .as_ref()
            .map(IdentityRegistry::trusted_key)
            .ok_or(AttestError::NotReady)
    }

    /// The last accepted value (zero until the first accepted update).
    pub fn current_value(&self) -> FieldElement {
        self.committed.current_value
    }

    /// The full committed state.
    pub fn committed_state(&self) -> &CommittedState {
        &self.committed
    }

    /// Events emitted so far, in emission order.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Drains the event log for the downstream consumer.
    pub fn take_events(&mut self) -> Vec<OracleEvent> {
        self.events.drain()
    }

    /// Verifies a candidate update and, if valid, commits it.
    ///
    /// 1. Fails with `NotReady` before genesis.
    /// 2. Re-affirms the registry key against the copy captured at genesis;
    ///    a mismatch is `IdentityMismatch` and should be treated as fatal.
    /// 3. Verifies the signature over the update's message bytes.
    /// 4. Invalid: fails with `InvalidSignature`, touching nothing.
    /// 5. Valid: sets the committed value and appends a `Price` then a
    ///    `Time` event.
    ///
    /// Resubmitting an identical valid triple succeeds again and re-emits
    /// (see the crate docs on replay protection).
    pub fn submit(
        &mut self,
        update: OracleUpdate,
        signature: &AttestationSignature,
    ) -> AttestResult<()> {
        let registry = self.registry.as_ref().ok_or(AttestError::NotReady)?;
        let genesis_key = self.genesis_key.ok_or(AttestError::NotReady)?;

        let registry_key = registry.trusted_key();
        check!(
            registry_key == genesis_key,
            AttestError::IdentityMismatch {
                expected: genesis_key,
                actual: registry_key,
            }
        );

        check!(
            verify_detached(registry.verifying_key(), &update, signature),
            AttestError::InvalidSignature
        );

        self.committed.current_value = update.value;
        self.events.emit(OracleEvent::Price {
            value: update.value,
        });
        self.events.emit(OracleEvent::Time {
            timestamp: update.timestamp,
        });
        Ok(())
    }
}

// ============ Tests ============
