//! Authorization engine — the single mutation entry point for wallet state.
//!
//! All cross-field invariants (spent vs. allowance, confirmation set vs.
//! quorum) only hold when the registry, limit tracker, and ledger mutate
//! as one unit, so the engine owns all three and callers go through
//! [`AuthorizationEngine::execute`] / [`AuthorizationEngine::confirm`].
//! The host environment is expected to serialize calls; the engine itself
//! has no internal locking.

use chrono::{DateTime, Utc};
use quorumvault_types::{Address, OperationId, Result, WalletConfig, WalletError, WalletEvent};
use rust_decimal::Decimal;

use crate::daily_limit::{DailyLimitTracker, ReserveOutcome};
use crate::ledger::{LedgerOutcome, OperationLedger};
use crate::owners::OwnerRegistry;
use crate::transfer::TransferService;

/// Outcome of an owner's execution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// The value fit under the daily allowance and was transferred at once.
    ImmediateExecution,
    /// The value exceeded the allowance; an operation now awaits quorum.
    ConfirmationNeeded(OperationId),
    /// The proposal met quorum on its own (`required == 1`) and executed.
    Executed(OperationId),
}

/// Outcome of a confirmation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// This confirmation tipped the quorum; the transfer executed and the
    /// operation was retired.
    Executed(OperationId),
    /// The operation remains pending. A re-confirmation by an owner who
    /// already confirmed reports the unchanged count here.
    StillPending {
        confirmations: usize,
        required: usize,
    },
}

/// The wallet's authorization state machine.
///
/// Two-tier policy: spends under the rolling daily allowance execute
/// immediately on one owner's authority; anything at or above it is gated
/// behind a quorum of distinct owner confirmations. Both tiers converge on
/// the same external [`TransferService`] call.
#[derive(Debug)]
pub struct AuthorizationEngine {
    registry: OwnerRegistry,
    daily_limit: DailyLimitTracker,
    ledger: OperationLedger,
    events: Vec<WalletEvent>,
}

impl AuthorizationEngine {
    /// Construct the wallet state for `creator` and the supplied config.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the config fails validation; no
    /// usable wallet instance exists in that case.
    pub fn new(creator: Address, config: &WalletConfig, now: DateTime<Utc>) -> Result<Self> {
        let registry = OwnerRegistry::new(creator, config)?;
        tracing::info!(
            creator = %creator,
            owners = registry.owner_count(),
            required = registry.required_confirmations(),
            daily_limit = %config.daily_limit,
            "wallet constructed"
        );
        Ok(Self {
            registry,
            daily_limit: DailyLimitTracker::new(config.daily_limit, now),
            ledger: OperationLedger::new(),
            events: Vec::new(),
        })
    }

    /// Record inbound value reported by the external ledger.
    ///
    /// The deposit itself happens in the transfer substrate; this hook only
    /// appends the observable `Deposit` record to the event trail.
    pub fn record_deposit(&mut self, from: Address, value: Decimal) {
        self.events.push(WalletEvent::Deposit { from, value });
    }

    /// An owner requests a transfer of `value` to `to`.
    ///
    /// Under the remaining daily allowance the transfer fires immediately;
    /// otherwise the request becomes a pending operation carrying the
    /// proposer's confirmation.
    ///
    /// # Errors
    /// - `NotAnOwner` if `owner` is not recognized (no state change).
    /// - `NegativeValue` if `value` is negative (no state change). The
    ///   allowance and quorum rules only hold over non-negative amounts;
    ///   a negative value would debit the allowance backwards.
    /// - `TransferFailure` if the service declines an immediate execution;
    ///   the allowance debit is *not* refunded.
    pub fn execute(
        &mut self,
        transfer: &mut impl TransferService,
        owner: Address,
        to: Address,
        value: Decimal,
        payload: &[u8],
        now: DateTime<Utc>,
    ) -> Result<ExecuteOutcome> {
        if !self.registry.is_owner(owner) {
            return Err(WalletError::NotAnOwner(owner));
        }
        if value.is_sign_negative() {
            return Err(WalletError::NegativeValue(value));
        }

        match self.daily_limit.try_reserve(value, now) {
            ReserveOutcome::Reserved => {
                if let Err(err) = transfer.transfer(to, value, payload) {
                    tracing::error!(
                        owner = %owner,
                        to = %to,
                        value = %value,
                        "transfer declined after daily-limit debit; allowance is not refunded"
                    );
                    return Err(err);
                }
                tracing::debug!(owner = %owner, to = %to, value = %value, "single transact");
                self.events
                    .push(WalletEvent::SingleTransact { owner, value, to });
                Ok(ExecuteOutcome::ImmediateExecution)
            }
            ReserveOutcome::Rejected => {
                let id = self.ledger.propose(owner, to, value, payload.to_vec(), now);
                self.events.push(WalletEvent::Confirmation {
                    owner,
                    operation: id,
                });

                // With a quorum of one the proposer's own confirmation
                // already suffices; the entry never stays in the ledger.
                if self.registry.required_confirmations() == 1 {
                    let op = self.ledger.retire(id)?;
                    return self.finish_quorum_transfer(transfer, owner, op.target, op.value, &op.payload, id)
                        .map(|()| ExecuteOutcome::Executed(id));
                }

                tracing::info!(
                    initiator = %owner,
                    to = %to,
                    value = %value,
                    operation = %id,
                    "over-limit request pending confirmation"
                );
                self.events.push(WalletEvent::ConfirmationNeeded {
                    initiator: owner,
                    value,
                    to,
                    operation: id,
                });
                Ok(ExecuteOutcome::ConfirmationNeeded(id))
            }
        }
    }

    /// An owner confirms a pending operation.
    ///
    /// Idempotent per owner. The confirmation that reaches quorum retires
    /// the operation and fires the transfer exactly once.
    ///
    /// # Errors
    /// - `NotAnOwner` if `owner` is not recognized (no state change).
    /// - `UnknownOperation` if `id` has no live entry — never proposed or
    ///   already executed; no transfer can fire.
    /// - `TransferFailure` if the service declines; the operation stays
    ///   retired and is *not* re-admitted.
    pub fn confirm(
        &mut self,
        transfer: &mut impl TransferService,
        owner: Address,
        id: OperationId,
    ) -> Result<ConfirmOutcome> {
        if !self.registry.is_owner(owner) {
            return Err(WalletError::NotAnOwner(owner));
        }

        match self.ledger.confirm(owner, id, &self.registry)? {
            LedgerOutcome::QuorumReached(op) => {
                self.events.push(WalletEvent::Confirmation {
                    owner,
                    operation: id,
                });
                self.finish_quorum_transfer(transfer, owner, op.target, op.value, &op.payload, id)
                    .map(|()| ConfirmOutcome::Executed(id))
            }
            LedgerOutcome::StillPending { confirmations } => {
                self.events.push(WalletEvent::Confirmation {
                    owner,
                    operation: id,
                });
                tracing::debug!(
                    owner = %owner,
                    operation = %id,
                    confirmations,
                    required = self.registry.required_confirmations(),
                    "confirmation recorded"
                );
                Ok(ConfirmOutcome::StillPending {
                    confirmations,
                    required: self.registry.required_confirmations(),
                })
            }
            LedgerOutcome::AlreadyConfirmed { confirmations } => Ok(ConfirmOutcome::StillPending {
                confirmations,
                required: self.registry.required_confirmations(),
            }),
        }
    }

    fn finish_quorum_transfer(
        &mut self,
        transfer: &mut impl TransferService,
        owner: Address,
        to: Address,
        value: Decimal,
        payload: &[u8],
        id: OperationId,
    ) -> Result<()> {
        if let Err(err) = transfer.transfer(to, value, payload) {
            tracing::error!(
                operation = %id,
                to = %to,
                value = %value,
                "transfer declined after quorum; operation stays retired"
            );
            return Err(err);
        }
        tracing::info!(owner = %owner, to = %to, value = %value, operation = %id, "multi transact");
        self.events
            .push(WalletEvent::MultiTransact { owner, value, to });
        Ok(())
    }

    // -----------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------

    #[must_use]
    pub fn is_owner(&self, address: Address) -> bool {
        self.registry.is_owner(address)
    }

    #[must_use]
    pub fn owner_count(&self) -> usize {
        self.registry.owner_count()
    }

    #[must_use]
    pub fn required_confirmations(&self) -> usize {
        self.registry.required_confirmations()
    }

    /// Allowance still spendable without quorum in the day containing `now`.
    #[must_use]
    pub fn remaining_allowance(&self, now: DateTime<Utc>) -> Decimal {
        self.daily_limit.remaining(now)
    }

    /// Amount already spent under the allowance in the day containing `now`.
    #[must_use]
    pub fn spent_today(&self, now: DateTime<Utc>) -> Decimal {
        self.daily_limit.spent_today(now)
    }

    /// The live operation ledger.
    #[must_use]
    pub fn ledger(&self) -> &OperationLedger {
        &self.ledger
    }

    /// The event trail so far.
    #[must_use]
    pub fn events(&self) -> &[WalletEvent] {
        &self.events
    }

    /// Drain the event trail (for sinks that ship events elsewhere).
    pub fn drain_events(&mut self) -> Vec<WalletEvent> {
        std::mem::take(&mut self.events)
    }
}
