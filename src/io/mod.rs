//! I/O module
//!
//! Handles CSV export of the transaction history.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (header layout, row serialization)

pub mod csv_format;

pub use csv_format::{format_holdings, write_transactions_csv};
