//! Operation ledger — pending multi-owner operations and their
//! confirmation sets.
//!
//! An entry is created the moment a request exceeds the remaining daily
//! allowance, accumulates distinct owner confirmations, and is removed the
//! instant quorum is reached. Removal happens *before* the transfer fires,
//! so a late or duplicate confirm hits the unknown-operation guard and can
//! never trigger a second transfer.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use quorumvault_types::{
    constants::PENDING_OPERATIONS_CAPACITY, Address, OperationId, Result, WalletError,
};
use rust_decimal::Decimal;

use crate::owners::OwnerRegistry;

/// A proposed, not-yet-quorum-reached spending action.
#[derive(Debug, Clone)]
pub struct PendingOperation {
    pub id: OperationId,
    /// The owner whose request created this operation.
    pub initiator: Address,
    pub target: Address,
    pub value: Decimal,
    /// Opaque call data; interpretation belongs to the transfer service.
    pub payload: Vec<u8>,
    /// Distinct owners that have confirmed. Grows monotonically.
    pub confirmed_by: HashSet<Address>,
    pub proposed_at: DateTime<Utc>,
}

/// Outcome of recording a confirmation.
#[derive(Debug)]
pub enum LedgerOutcome {
    /// Quorum reached — the entry has been retired and is handed to the
    /// caller for exactly-once execution.
    QuorumReached(PendingOperation),
    /// Confirmation recorded; more are needed.
    StillPending { confirmations: usize },
    /// The owner had already confirmed; nothing changed.
    AlreadyConfirmed { confirmations: usize },
}

/// Mapping from operation id to its live [`PendingOperation`].
#[derive(Debug, Default)]
pub struct OperationLedger {
    pending: HashMap<OperationId, PendingOperation>,
    /// Per-proposal nonce folded into each operation id, so structurally
    /// identical requests are always distinct operations.
    sequence: u64,
}

impl OperationLedger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: HashMap::with_capacity(PENDING_OPERATIONS_CAPACITY),
            sequence: 0,
        }
    }

    /// Register a new operation with the proposer's confirmation already
    /// recorded.
    ///
    /// The caller (the authorization engine) has already verified the
    /// proposer is an owner and must check quorum afterwards — with
    /// `required == 1` the fresh entry is immediately executable.
    pub fn propose(
        &mut self,
        initiator: Address,
        target: Address,
        value: Decimal,
        payload: Vec<u8>,
        now: DateTime<Utc>,
    ) -> OperationId {
        let nonce = self.sequence;
        self.sequence += 1;

        let id = OperationId::derive(target, value, &payload, nonce);
        let mut confirmed_by = HashSet::new();
        confirmed_by.insert(initiator);

        self.pending.insert(
            id,
            PendingOperation {
                id,
                initiator,
                target,
                value,
                payload,
                confirmed_by,
                proposed_at: now,
            },
        );
        id
    }

    /// Record `owner`'s confirmation on a live operation.
    ///
    /// Idempotent per owner: re-confirming is a no-op, not an error, and
    /// does not grow the set. When the distinct-confirmation count reaches
    /// quorum the entry is removed and returned.
    ///
    /// # Errors
    /// Returns [`WalletError::UnknownOperation`] if `id` has no live entry
    /// (never proposed, or already executed).
    pub fn confirm(
        &mut self,
        owner: Address,
        id: OperationId,
        registry: &OwnerRegistry,
    ) -> Result<LedgerOutcome> {
        let op = self
            .pending
            .get_mut(&id)
            .ok_or(WalletError::UnknownOperation(id))?;

        if !op.confirmed_by.insert(owner) {
            return Ok(LedgerOutcome::AlreadyConfirmed {
                confirmations: op.confirmed_by.len(),
            });
        }
        let confirmations = op.confirmed_by.len();
        let reached = registry.has_quorum(&op.confirmed_by);

        if reached {
            // Retire before execution: exactly-once is enforced by removal.
            let op = self
                .pending
                .remove(&id)
                .ok_or_else(|| WalletError::Internal(format!("operation {id} vanished")))?;
            return Ok(LedgerOutcome::QuorumReached(op));
        }

        Ok(LedgerOutcome::StillPending { confirmations })
    }

    /// Remove and return a freshly proposed entry (the `required == 1`
    /// immediate-execution edge case).
    pub(crate) fn retire(&mut self, id: OperationId) -> Result<PendingOperation> {
        self.pending
            .remove(&id)
            .ok_or(WalletError::UnknownOperation(id))
    }

    /// Look up a live operation.
    #[must_use]
    pub fn get(&self, id: &OperationId) -> Option<&PendingOperation> {
        self.pending.get(id)
    }

    /// Number of live pending operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no operations are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
