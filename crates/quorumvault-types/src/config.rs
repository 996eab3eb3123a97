//! Wallet construction parameters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Address, Result, WalletError};

/// Construction parameters for a wallet instance.
///
/// The constructing caller is added as an implicit extra owner beyond the
/// supplied list, so the effective owner count is `owners.len() + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    /// The supplied owner list (the creator is added on top of this).
    pub owners: Vec<Address>,
    /// Number of distinct confirmations required for over-limit transfers.
    pub required: usize,
    /// Value spendable per UTC day without multi-owner confirmation.
    pub daily_limit: Decimal,
}

impl WalletConfig {
    #[must_use]
    pub fn new(owners: Vec<Address>, required: usize, daily_limit: Decimal) -> Self {
        Self {
            owners,
            required,
            daily_limit,
        }
    }

    /// Fail-closed validation. A wallet must never exist in a broken state.
    ///
    /// # Errors
    /// Returns [`WalletError::InvalidConfiguration`] if the owner list is
    /// empty or contains duplicates, the quorum threshold is out of range,
    /// or the daily limit is negative.
    pub fn validate(&self) -> Result<()> {
        if self.owners.is_empty() {
            return Err(WalletError::InvalidConfiguration {
                reason: "owner list must not be empty".to_string(),
            });
        }
        for (i, owner) in self.owners.iter().enumerate() {
            if self.owners[..i].contains(owner) {
                return Err(WalletError::InvalidConfiguration {
                    reason: format!("duplicate owner in list: {owner}"),
                });
            }
        }
        // The creator occupies one slot beyond the supplied list.
        let owner_count = self.owners.len() + 1;
        if self.required < 1 || self.required > owner_count {
            return Err(WalletError::InvalidConfiguration {
                reason: format!(
                    "required confirmations {} out of range 1..={owner_count}",
                    self.required,
                ),
            });
        }
        if self.daily_limit.is_sign_negative() {
            return Err(WalletError::InvalidConfiguration {
                reason: format!("daily limit {} must not be negative", self.daily_limit),
            });
        }
        Ok(())
    }
}
