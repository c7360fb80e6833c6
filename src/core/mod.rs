//! Core business logic module
//!
//! This module contains the account's decision logic:
//! - `ledger` - The account ledger: balances, holdings, validation rules
//! - `journal` - Append-only transaction history

pub mod journal;
pub mod ledger;

pub use journal::Journal;
pub use ledger::Ledger;
