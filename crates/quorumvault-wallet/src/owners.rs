//! Owner registry — the fixed owner set and the quorum rule.
//!
//! The set is established at construction and immutable afterwards.
//! Owner management (add/remove/replace) is an explicit non-goal of this
//! engine and lives outside it.

use std::collections::HashSet;

use quorumvault_types::{Address, Result, WalletConfig};

/// The fixed set of authorized owners plus the quorum threshold.
///
/// The creator occupies one slot beyond the supplied list, so
/// `owner_count() == supplied.len() + 1` — even when the creator also
/// appears in the supplied list. Quorum is counted over *distinct*
/// addresses, so that duplication can never double-count a confirmation.
#[derive(Debug, Clone)]
pub struct OwnerRegistry {
    creator: Address,
    owners: Vec<Address>,
    required: usize,
}

impl OwnerRegistry {
    /// Build the registry from the constructing caller and the wallet config.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the config fails validation
    /// (empty list, duplicates, quorum out of range).
    pub fn new(creator: Address, config: &WalletConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            creator,
            owners: config.owners.clone(),
            required: config.required,
        })
    }

    /// Whether `address` may initiate or confirm spending actions.
    #[must_use]
    pub fn is_owner(&self, address: Address) -> bool {
        address == self.creator || self.owners.contains(&address)
    }

    /// Number of owner slots (supplied list plus the implicit creator).
    #[must_use]
    pub fn owner_count(&self) -> usize {
        self.owners.len() + 1
    }

    /// Minimum number of distinct confirmations for an over-limit transfer.
    #[must_use]
    pub fn required_confirmations(&self) -> usize {
        self.required
    }

    /// Whether a confirmation set satisfies the quorum threshold.
    #[must_use]
    pub fn has_quorum(&self, confirmed_by: &HashSet<Address>) -> bool {
        confirmed_by.len() >= self.required
    }

    /// The implicit creator-owner.
    #[must_use]
    pub fn creator(&self) -> Address {
        self.creator
    }
}
