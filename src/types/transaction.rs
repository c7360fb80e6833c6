//! Transaction-related types for the brokerage ledger
//!
//! This module defines the transaction kinds and the immutable journal record
//! that captures every attempted ledger operation, successful or not.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of shares in a holding or trade request
///
/// Share counts are whole, non-negative quantities. A requested count of
/// zero is rejected by the ledger as a business-rule violation.
pub type ShareCount = u32;

/// The kinds of operation recorded in the transaction journal
///
/// Every mutating ledger call appends exactly one record tagged with one of
/// these kinds. `InitialDeposit` appears once, as the first record written
/// during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// The opening deposit captured at construction
    InitialDeposit,

    /// Cash added to the balance
    Deposit,

    /// Cash removed from the balance
    Withdrawal,

    /// Shares purchased with available cash
    Buy,

    /// Held shares sold for cash
    Sell,
}

impl TransactionKind {
    /// Stable snake_case name, used for rendering and CSV export
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::InitialDeposit => "initial_deposit",
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Buy => "buy",
            TransactionKind::Sell => "sell",
        }
    }
}

/// One immutable entry in the transaction journal
///
/// A record is appended for every attempted mutating operation, including
/// rejected ones. Records are never edited or removed after being appended,
/// so the journal is a complete audit trail of the account.
///
/// Currency fields are rounded to 2 decimal places at the moment the record
/// is created. `holdings_after` is a full snapshot copy, so later mutation of
/// the live holdings cannot retroactively alter history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Which operation was attempted
    pub kind: TransactionKind,

    /// Capture time of the attempt
    pub timestamp: DateTime<Utc>,

    /// Cash amount associated with the attempt
    ///
    /// The requested deposit/withdrawal amount, or the computed trade
    /// cost/revenue. Zero when the attempt was rejected before any amount
    /// could be computed (zero quantity, unknown symbol).
    pub amount: Decimal,

    /// Stock symbol, present for buy/sell, already uppercased
    pub symbol: Option<String>,

    /// Requested share count, present for buy/sell even when rejected
    pub quantity: Option<ShareCount>,

    /// Quoted price per share, present for buy/sell when a lookup succeeded
    pub price_per_share: Option<Decimal>,

    /// Whether the attempt mutated the account
    pub success: bool,

    /// Human-readable confirmation or rejection reason
    pub message: String,

    /// Account balance after the attempt (unchanged when it failed)
    pub balance_after: Decimal,

    /// Snapshot of the holdings at the moment the record was created
    pub holdings_after: BTreeMap<String, ShareCount>,
}
