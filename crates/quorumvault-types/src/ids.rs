//! Identifiers used throughout QuorumVault.
//!
//! Addresses are opaque 20-byte values supplied by the host environment;
//! the engine never validates their format (that is the substrate's job).
//! Operation ids are content-addressed SHA-256 digests so every node that
//! sees the same proposal derives the same id.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::OPERATION_ID_TAG;

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// An address-like identifier for owners and transfer targets.
///
/// Raw 20 bytes, displayed as `0x`-prefixed hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Short hex prefix for log lines.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Random address for tests and simulations.
    #[cfg(any(test, feature = "test-helpers"))]
    #[must_use]
    pub fn random() -> Self {
        use rand::Rng;
        let mut bytes = [0u8; 20];
        rand::thread_rng().fill(&mut bytes[..]);
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// ---------------------------------------------------------------------------
// OperationId
// ---------------------------------------------------------------------------

/// Content-addressed identifier for a pending multi-owner operation.
///
/// Derived from `(target, value, payload)` plus a per-proposal sequence
/// nonce, so two structurally identical requests submitted separately are
/// always distinct operations and never merge their confirmation sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OperationId(pub [u8; 32]);

impl OperationId {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Deterministic id for a proposal.
    ///
    /// The nonce is the proposing ledger's sequence counter; it is what
    /// keeps repeat requests with identical fields apart.
    #[must_use]
    pub fn derive(target: Address, value: Decimal, payload: &[u8], nonce: u64) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(OPERATION_ID_TAG);
        hasher.update(target.as_bytes());
        hasher.update(value.serialize());
        hasher.update((payload.len() as u64).to_le_bytes());
        hasher.update(payload);
        hasher.update(nonce.to_le_bytes());
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
