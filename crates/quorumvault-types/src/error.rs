//! Error types for the QuorumVault wallet engine.
//!
//! All errors use the `WLT_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Configuration errors
//! - 2xx: Authorization errors
//! - 3xx: Operation errors
//! - 4xx: Transfer errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{Address, OperationId};

/// Central error enum for all QuorumVault operations.
#[derive(Debug, Error)]
pub enum WalletError {
    // =================================================================
    // Configuration Errors (1xx)
    // =================================================================
    /// The constructor arguments describe an unusable wallet.
    /// Construction aborts; a wallet must never exist in a broken state.
    #[error("WLT_ERR_100: Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    // =================================================================
    // Authorization Errors (2xx)
    // =================================================================
    /// The caller is not a registered owner. No state was changed.
    #[error("WLT_ERR_200: Not an owner: {0}")]
    NotAnOwner(Address),

    /// A transfer request carried a negative value. The allowance and
    /// quorum rules are stated over non-negative amounts; a negative
    /// value would debit the allowance backwards, so the request is
    /// rejected with no state change.
    #[error("WLT_ERR_201: Negative transfer value: {0}")]
    NegativeValue(Decimal),

    // =================================================================
    // Operation Errors (3xx)
    // =================================================================
    /// The operation id has no live ledger entry — it never existed or
    /// already executed. No state was changed and no transfer fired.
    #[error("WLT_ERR_300: Unknown operation: {0}")]
    UnknownOperation(OperationId),

    // =================================================================
    // Transfer Errors (4xx)
    // =================================================================
    /// The external value-transfer service declined to move value.
    ///
    /// By the debit-then-act ordering, a reservation already taken from
    /// the daily allowance is not refunded and a quorum-retired operation
    /// is not re-admitted. Operators should treat this as an alerting
    /// condition, not a silent retry.
    #[error("WLT_ERR_400: Transfer of {value} to {to} failed: {reason}")]
    TransferFailure {
        to: Address,
        value: Decimal,
        reason: String,
    },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("WLT_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = WalletError::NotAnOwner(Address::from_bytes([7u8; 20]));
        let msg = format!("{err}");
        assert!(msg.starts_with("WLT_ERR_200"), "Got: {msg}");
    }

    #[test]
    fn transfer_failure_display() {
        let err = WalletError::TransferFailure {
            to: Address::from_bytes([1u8; 20]),
            value: Decimal::new(5, 1),
            reason: "pool exhausted".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("WLT_ERR_400"));
        assert!(msg.contains("0.5"));
        assert!(msg.contains("pool exhausted"));
    }

    #[test]
    fn all_errors_have_wlt_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(WalletError::InvalidConfiguration {
                reason: "test".into(),
            }),
            Box::new(WalletError::NotAnOwner(Address::from_bytes([0u8; 20]))),
            Box::new(WalletError::NegativeValue(Decimal::NEGATIVE_ONE)),
            Box::new(WalletError::UnknownOperation(OperationId::from_bytes(
                [0u8; 32],
            ))),
            Box::new(WalletError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("WLT_ERR_"),
                "Error missing WLT_ERR_ prefix: {msg}"
            );
        }
    }
}
