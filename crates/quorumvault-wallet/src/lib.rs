//! # quorumvault-wallet
//!
//! The QuorumVault wallet engine: a fixed owner set jointly controls a
//! pool of value held by an external transfer service.
//!
//! ## Architecture
//!
//! 1. **OwnerRegistry**: the fixed owner set and the quorum rule
//! 2. **DailyLimitTracker**: the rolling per-day allowance for
//!    single-owner spends
//! 3. **OperationLedger**: pending over-limit operations and their
//!    confirmation sets
//! 4. **AuthorizationEngine**: the orchestrator and sole mutation entry
//!    point
//! 5. **TransferService**: the boundary to whatever actually moves value
//!
//! ## Request Flow
//!
//! ```text
//! owner request → AuthorizationEngine.execute()
//!     → DailyLimitTracker.try_reserve()
//!         Reserved → TransferService.transfer()            (SingleTransact)
//!         Rejected → OperationLedger.propose()             (ConfirmationNeeded)
//! owner confirm → AuthorizationEngine.confirm()
//!     → OperationLedger.confirm() → quorum? → transfer()   (MultiTransact)
//! ```
//!
//! The host environment serializes all mutating calls; the engine assumes
//! no two `execute`/`confirm` calls interleave.

pub mod daily_limit;
pub mod engine;
pub mod ledger;
pub mod owners;
pub mod transfer;

pub use daily_limit::{DailyLimitTracker, ReserveOutcome};
pub use engine::{AuthorizationEngine, ConfirmOutcome, ExecuteOutcome};
pub use ledger::{LedgerOutcome, OperationLedger, PendingOperation};
pub use owners::OwnerRegistry;
pub use transfer::{InMemoryLedger, TransferService};
