//! Brokerage Ledger Library
//!
//! # Overview
//!
//! A simulated brokerage ledger for a single account: cash balance, share
//! holdings, and a complete append-only transaction history, with every
//! business rule enforced by the ledger itself.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (transaction records, errors)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - The account ledger: balances, holdings, validation
//!   - [`core::journal`] - Append-only transaction history
//! - [`pricing`] - Injectable price source trait and the fixed quote table
//! - [`io`] - CSV export of the transaction history
//! - [`console`] - Line-oriented interactive front end
//! - [`cli`] - CLI argument parsing
//!
//! # Operations
//!
//! The ledger supports five recorded operation kinds:
//!
//! - **Initial deposit**: The opening balance captured at construction
//! - **Deposit**: Credit cash to the balance
//! - **Withdrawal**: Debit cash (requires sufficient balance)
//! - **Buy**: Purchase shares at the quoted price (requires sufficient cash)
//! - **Sell**: Sell held shares at the quoted price (requires the shares)
//!
//! Business-rule violations never panic or error: the operation returns
//! `false` and a failed transaction record explains why. Every mutating
//! call, successful or not, appends exactly one record to the journal.
//!
//! # Derived Metrics
//!
//! - **Portfolio value**: Cash plus the market value of all holdings
//! - **Profit/loss**: Portfolio value minus the opening deposit

// Module declarations
pub mod cli;
pub mod console;
pub mod core;
pub mod io;
pub mod pricing;
pub mod types;

pub use crate::console::{Command, Session};
pub use crate::core::{Journal, Ledger};
pub use crate::io::write_transactions_csv;
pub use crate::pricing::{FixedPriceTable, PriceSource};
pub use crate::types::{LedgerError, ShareCount, TransactionKind, TransactionRecord};
