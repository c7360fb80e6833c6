//! Core data types for the brokerage ledger
//!
//! - `transaction` - Transaction kinds and journal records
//! - `error` - Hard-failure error type

pub mod error;
pub mod transaction;

pub use error::LedgerError;
pub use transaction::{ShareCount, TransactionKind, TransactionRecord};
