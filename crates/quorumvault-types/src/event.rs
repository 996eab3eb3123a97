//! Observable wallet events.
//!
//! Every state transition the engine performs emits exactly one event
//! record into the wallet's event trail. The shapes mirror what the host
//! environment's receipt logs expose to observers; field names are part
//! of the observable contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Address, OperationId};

/// One observable wallet event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletEvent {
    /// Inbound value arrived in the wallet's pool.
    Deposit { from: Address, value: Decimal },
    /// An under-limit transfer executed immediately on one owner's authority.
    SingleTransact {
        owner: Address,
        value: Decimal,
        to: Address,
    },
    /// An owner's confirmation was recorded (proposer or later confirmer).
    Confirmation {
        owner: Address,
        operation: OperationId,
    },
    /// An over-limit request was registered and awaits further confirmations.
    /// Emitted once, at proposal time.
    ConfirmationNeeded {
        initiator: Address,
        value: Decimal,
        to: Address,
        operation: OperationId,
    },
    /// A quorum-approved transfer executed. `owner` is the confirmer whose
    /// confirmation tipped the threshold, not the original proposer.
    MultiTransact {
        owner: Address,
        value: Decimal,
        to: Address,
    },
}

impl WalletEvent {
    /// Stable tag for log lines and serialized trails.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Deposit { .. } => "DEPOSIT",
            Self::SingleTransact { .. } => "SINGLE_TRANSACT",
            Self::Confirmation { .. } => "CONFIRMATION",
            Self::ConfirmationNeeded { .. } => "CONFIRMATION_NEEDED",
            Self::MultiTransact { .. } => "MULTI_TRANSACT",
        }
    }
}

impl std::fmt::Display for WalletEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
