//! Attestor Common Library
//!
//! Shared types, constants, and utilities for the price-attestor contracts.
//!
//! The attestor admits an oracle price update into durable state only when it
//! carries a valid Ed25519 signature from the trusted data provider. This
//! crate holds everything both sides of that check agree on:
//!
//! - **Field elements**: canonical 256-bit values bounded by the curve's
//!   base-field modulus, the domain of every signed value
//! - **Attestation signatures**: detached `(r, s)` pairs over the price/time
//!   message
//! - **Typed errors**: structured failures with stable codes for logging
//! - **Events**: the append-only log consumed by off-chain indexers
//! - **Feed documents**: the provider's JSON wire shape and its checked
//!   decoding into core types
//!
//! This crate is `no_std` compatible when built without the default `std`
//! feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-export Vec and String for submodules based on feature
#[cfg(not(feature = "std"))]
pub use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
pub use std::{string::String, vec::Vec};

pub mod constants;
pub mod errors;
pub mod types;
pub mod events;
pub mod validation;
pub mod feed;

// Re-exports for convenience
pub use constants::*;
pub use errors::*;
pub use types::*;
pub use events::*;
pub use validation::*;
pub use feed::*;
