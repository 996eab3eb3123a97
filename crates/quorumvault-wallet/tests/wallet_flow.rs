//! End-to-end wallet flow tests.
//!
//! These reproduce the observable lifecycle of a three-owner custodial
//! wallet: construction, deposit, an under-limit spend, an over-limit
//! proposal, and the second confirmation that releases it — checking the
//! event trail and balances after every step.

use chrono::{DateTime, TimeZone, Utc};
use quorumvault_types::{Address, WalletConfig, WalletError, WalletEvent};
use quorumvault_wallet::{
    AuthorizationEngine, ConfirmOutcome, ExecuteOutcome, InMemoryLedger,
};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

/// Helper: a wallet wired to an in-memory transfer ledger.
struct WalletFixture {
    creator: Address,
    owners: [Address; 3],
    engine: AuthorizationEngine,
    ledger: InMemoryLedger,
}

impl WalletFixture {
    /// Three supplied owners (the creator among them), quorum of two,
    /// 0.7 daily limit.
    fn new() -> Self {
        let creator = Address::from_bytes([0xcd; 20]);
        let owners = [
            creator,
            Address::from_bytes([0xde; 20]),
            Address::from_bytes([0xf6; 20]),
        ];
        let config = WalletConfig::new(owners.to_vec(), 2, dec("0.7"));
        let engine = AuthorizationEngine::new(creator, &config, t0()).unwrap();
        Self {
            creator,
            owners,
            engine,
            ledger: InMemoryLedger::new(),
        }
    }

    fn deposit(&mut self, from: Address, value: Decimal) {
        self.ledger.deposit(value);
        self.engine.record_deposit(from, value);
    }
}

#[test]
fn wallet_lifecycle_end_to_end() {
    let mut fx = WalletFixture::new();
    let recipient = fx.owners[1];

    // Construction: supplied list plus the implicit creator.
    assert_eq!(fx.engine.required_confirmations(), 2);
    assert_eq!(fx.engine.owner_count(), 4);

    // Deposit 1 ether-equivalent into the pool.
    fx.deposit(fx.owners[1], dec("1"));
    assert_eq!(fx.ledger.balance(), dec("1"));
    assert_eq!(
        fx.engine.drain_events(),
        vec![WalletEvent::Deposit {
            from: fx.owners[1],
            value: dec("1"),
        }]
    );

    // 0.4 fits under the 0.7 limit: executes immediately, one event.
    let outcome = fx
        .engine
        .execute(&mut fx.ledger, fx.creator, recipient, dec("0.4"), b"", t0())
        .unwrap();
    assert_eq!(outcome, ExecuteOutcome::ImmediateExecution);
    assert_eq!(fx.ledger.balance(), dec("0.6"));
    assert_eq!(fx.ledger.account_balance(recipient), dec("0.4"));
    assert_eq!(
        fx.engine.drain_events(),
        vec![WalletEvent::SingleTransact {
            owner: fx.creator,
            value: dec("0.4"),
            to: recipient,
        }]
    );

    // 0.5 exceeds the remaining 0.3: no value moves, an operation is
    // registered, and the trail shows Confirmation then ConfirmationNeeded.
    let outcome = fx
        .engine
        .execute(&mut fx.ledger, fx.creator, recipient, dec("0.5"), b"", t0())
        .unwrap();
    let operation = match outcome {
        ExecuteOutcome::ConfirmationNeeded(id) => id,
        other => panic!("expected ConfirmationNeeded, got {other:?}"),
    };
    assert_eq!(fx.ledger.balance(), dec("0.6"));
    assert_eq!(fx.engine.ledger().len(), 1);
    assert_eq!(
        fx.engine.drain_events(),
        vec![
            WalletEvent::Confirmation {
                owner: fx.creator,
                operation,
            },
            WalletEvent::ConfirmationNeeded {
                initiator: fx.creator,
                value: dec("0.5"),
                to: recipient,
                operation,
            },
        ]
    );

    // The third owner confirms: quorum of two reached, the transfer fires,
    // and the MultiTransact names the tipping confirmer.
    let outcome = fx
        .engine
        .confirm(&mut fx.ledger, fx.owners[2], operation)
        .unwrap();
    assert_eq!(outcome, ConfirmOutcome::Executed(operation));
    assert_eq!(fx.ledger.balance(), dec("0.1"));
    assert_eq!(fx.ledger.account_balance(recipient), dec("0.9"));
    assert!(fx.engine.ledger().is_empty());
    assert_eq!(
        fx.engine.drain_events(),
        vec![
            WalletEvent::Confirmation {
                owner: fx.owners[2],
                operation,
            },
            WalletEvent::MultiTransact {
                owner: fx.owners[2],
                value: dec("0.5"),
                to: recipient,
            },
        ]
    );
}

#[test]
fn stranger_cannot_spend_or_confirm() {
    let mut fx = WalletFixture::new();
    let stranger = Address::from_bytes([0x11; 20]);
    fx.deposit(fx.owners[1], dec("1"));

    let err = fx
        .engine
        .execute(&mut fx.ledger, stranger, fx.owners[1], dec("0.1"), b"", t0())
        .unwrap_err();
    assert!(matches!(err, WalletError::NotAnOwner(found) if found == stranger));
    assert_eq!(fx.ledger.balance(), dec("1"));

    let operation = match fx
        .engine
        .execute(&mut fx.ledger, fx.creator, fx.owners[1], dec("0.8"), b"", t0())
        .unwrap()
    {
        ExecuteOutcome::ConfirmationNeeded(id) => id,
        other => panic!("unexpected {other:?}"),
    };

    let err = fx
        .engine
        .confirm(&mut fx.ledger, stranger, operation)
        .unwrap_err();
    assert!(matches!(err, WalletError::NotAnOwner(_)));
    assert_eq!(fx.engine.ledger().get(&operation).unwrap().confirmed_by.len(), 1);
}

#[test]
fn duplicate_confirmations_never_double_spend() {
    let mut fx = WalletFixture::new();
    let recipient = fx.owners[1];
    fx.deposit(fx.owners[1], dec("2"));

    let operation = match fx
        .engine
        .execute(&mut fx.ledger, fx.creator, recipient, dec("1.5"), b"", t0())
        .unwrap()
    {
        ExecuteOutcome::ConfirmationNeeded(id) => id,
        other => panic!("unexpected {other:?}"),
    };

    // The proposer re-confirming their own proposal changes nothing.
    let outcome = fx
        .engine
        .confirm(&mut fx.ledger, fx.creator, operation)
        .unwrap();
    assert_eq!(
        outcome,
        ConfirmOutcome::StillPending {
            confirmations: 1,
            required: 2,
        }
    );
    assert_eq!(fx.ledger.balance(), dec("2"));

    // Quorum, execution, retirement.
    fx.engine
        .confirm(&mut fx.ledger, fx.owners[2], operation)
        .unwrap();
    assert_eq!(fx.ledger.balance(), dec("0.5"));

    // Any further confirmation hits the unknown-operation guard.
    let err = fx
        .engine
        .confirm(&mut fx.ledger, fx.owners[1], operation)
        .unwrap_err();
    assert!(matches!(err, WalletError::UnknownOperation(_)));
    assert_eq!(fx.ledger.balance(), dec("0.5"));
}

#[test]
fn separate_proposals_do_not_share_confirmations() {
    let mut fx = WalletFixture::new();
    let recipient = fx.owners[1];
    fx.deposit(fx.owners[1], dec("3"));

    // Two structurally identical over-limit requests from two owners.
    let first = match fx
        .engine
        .execute(&mut fx.ledger, fx.creator, recipient, dec("1"), b"", t0())
        .unwrap()
    {
        ExecuteOutcome::ConfirmationNeeded(id) => id,
        other => panic!("unexpected {other:?}"),
    };
    let second = match fx
        .engine
        .execute(&mut fx.ledger, fx.owners[2], recipient, dec("1"), b"", t0())
        .unwrap()
    {
        ExecuteOutcome::ConfirmationNeeded(id) => id,
        other => panic!("unexpected {other:?}"),
    };

    assert_ne!(first, second);
    assert_eq!(fx.engine.ledger().len(), 2);

    // Completing the first leaves the second untouched.
    fx.engine
        .confirm(&mut fx.ledger, fx.owners[2], first)
        .unwrap();
    assert_eq!(fx.ledger.balance(), dec("2"));
    assert_eq!(fx.engine.ledger().len(), 1);
    assert!(fx.engine.ledger().get(&second).is_some());
}

#[test]
fn invalid_configurations_yield_no_wallet() {
    let creator = Address::from_bytes([0xcd; 20]);
    let a = Address::from_bytes([1; 20]);
    let b = Address::from_bytes([2; 20]);

    for config in [
        WalletConfig::new(vec![a, b], 0, dec("1")),
        WalletConfig::new(vec![a, b], 4, dec("1")),
        WalletConfig::new(vec![a, b, a], 2, dec("1")),
        WalletConfig::new(vec![], 1, dec("1")),
    ] {
        let err = AuthorizationEngine::new(creator, &config, t0()).unwrap_err();
        assert!(
            matches!(err, WalletError::InvalidConfiguration { .. }),
            "config {config:?} should fail construction"
        );
    }
}
