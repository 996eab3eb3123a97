//! Value-transfer boundary.
//!
//! The engine never moves value itself; it asks an external service that
//! either succeeds atomically or declines. [`InMemoryLedger`] is the
//! in-process implementation used by tests and simulations: one wallet
//! pool plus per-address credit accounts.

use std::collections::HashMap;

use quorumvault_types::{Address, Result, WalletError};
use rust_decimal::Decimal;

/// External collaborator that actually moves value.
///
/// The call is assumed atomic and immediately observable to balance
/// queries; the payload is opaque call data whose interpretation is the
/// service's responsibility.
pub trait TransferService {
    /// Move `value` from the wallet's pool to `to`.
    ///
    /// # Errors
    /// Returns [`WalletError::TransferFailure`] if the service declines.
    fn transfer(&mut self, to: Address, value: Decimal, payload: &[u8]) -> Result<()>;
}

/// In-process transfer service: a single wallet pool and per-address
/// credit accounts.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    pool: Decimal,
    accounts: HashMap<Address, Decimal>,
}

impl InMemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool: Decimal::ZERO,
            accounts: HashMap::new(),
        }
    }

    /// Credit inbound value to the wallet's pool.
    pub fn deposit(&mut self, value: Decimal) {
        self.pool += value;
    }

    /// Current wallet pool balance.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.pool
    }

    /// Value transferred out to `address` so far.
    #[must_use]
    pub fn account_balance(&self, address: Address) -> Decimal {
        self.accounts.get(&address).copied().unwrap_or_default()
    }
}

impl TransferService for InMemoryLedger {
    fn transfer(&mut self, to: Address, value: Decimal, _payload: &[u8]) -> Result<()> {
        if self.pool < value {
            return Err(WalletError::TransferFailure {
                to,
                value,
                reason: format!("pool balance {} is insufficient", self.pool),
            });
        }
        self.pool -= value;
        *self.accounts.entry(to).or_default() += value;
        Ok(())
    }
}

/// Transfer service that declines every call. Test double for the
/// reservation-is-not-refunded property.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Default)]
pub struct FailingTransferService;

#[cfg(any(test, feature = "test-helpers"))]
impl TransferService for FailingTransferService {
    fn transfer(&mut self, to: Address, value: Decimal, _payload: &[u8]) -> Result<()> {
        Err(WalletError::TransferFailure {
            to,
            value,
            reason: "service declined".to_string(),
        })
    }
}
