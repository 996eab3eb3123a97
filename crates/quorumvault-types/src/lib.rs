//! # quorumvault-types
//!
//! Shared types, errors, and configuration for the **QuorumVault**
//! multi-owner wallet engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`OperationId`]
//! - **Events**: [`WalletEvent`] — the five observable event shapes
//! - **Configuration**: [`WalletConfig`]
//! - **Errors**: [`WalletError`] with `WLT_ERR_` prefix codes
//! - **Constants**: day-window length, id domain tag

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;

// Re-export all primary types at crate root for ergonomic imports:
//   use quorumvault_types::{Address, OperationId, WalletEvent, ...};

pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;

// Constants are accessed via `quorumvault_types::constants::FOO`
// (not re-exported to avoid name collisions).
