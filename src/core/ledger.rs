//! The account ledger
//!
//! This module provides the Ledger, the component that owns the cash
//! balance, share holdings, and transaction journal for a single simulated
//! brokerage account, and that enforces every business rule:
//!
//! - The balance never goes negative as a result of a ledger operation
//! - Shares can only be sold if they are actually held
//! - Purchases require the full cost to be available in cash
//!
//! All mutating operations are synchronous, return a success flag rather
//! than raising for business-rule violations, and append exactly one journal
//! record as their final step, whether they succeed or fail. Only a negative
//! opening deposit at construction is a hard failure.

use crate::core::journal::Journal;
use crate::pricing::PriceSource;
use crate::types::{LedgerError, ShareCount, TransactionKind, TransactionRecord};
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Single-account brokerage ledger
///
/// Owns the account state and an injected price source. The price source is
/// consulted once per trade for pricing and once per held symbol during
/// portfolio valuation.
///
/// # Rounding
///
/// The balance accumulates at full precision internally. Every currency
/// value that leaves the ledger (query results and journal record fields) is
/// rounded to 2 decimal places with `Decimal::round_dp`, whose midpoint
/// strategy is round-half-to-even.
#[derive(Debug)]
pub struct Ledger<P: PriceSource> {
    /// Cash balance at full internal precision
    balance: Decimal,

    /// Opening deposit, immutable after construction
    initial_deposit: Decimal,

    /// Symbol to share count; entries are strictly positive
    holdings: BTreeMap<String, ShareCount>,

    /// Append-only history of attempted operations
    journal: Journal,

    /// Injected quote source
    prices: P,
}

impl<P: PriceSource> Ledger<P> {
    /// Create a new account with an opening deposit
    ///
    /// Records one successful `initial_deposit` transaction. A zero deposit
    /// is allowed and recorded with its own message.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NegativeInitialDeposit` if `initial_deposit` is
    /// negative; no account is produced in that case.
    pub fn new(initial_deposit: Decimal, prices: P) -> Result<Self, LedgerError> {
        if initial_deposit < Decimal::ZERO {
            return Err(LedgerError::negative_initial_deposit(initial_deposit));
        }

        let mut ledger = Ledger {
            balance: initial_deposit,
            initial_deposit,
            holdings: BTreeMap::new(),
            journal: Journal::new(),
            prices,
        };

        let message = if initial_deposit > Decimal::ZERO {
            format!(
                "Account initialized with an initial deposit of {:.2}.",
                initial_deposit.round_dp(2)
            )
        } else {
            "Account initialized with zero initial deposit.".to_string()
        };
        ledger.record(
            TransactionKind::InitialDeposit,
            initial_deposit,
            None,
            None,
            None,
            true,
            message,
        );

        Ok(ledger)
    }

    /// Add cash to the balance
    ///
    /// Rejects non-positive amounts. Always appends a journal record.
    ///
    /// # Returns
    ///
    /// `true` if the deposit was applied, `false` if it was rejected.
    pub fn deposit(&mut self, amount: Decimal) -> bool {
        if amount <= Decimal::ZERO {
            self.record(
                TransactionKind::Deposit,
                amount,
                None,
                None,
                None,
                false,
                "Deposit amount must be positive.".to_string(),
            );
            return false;
        }

        self.balance += amount;
        self.record(
            TransactionKind::Deposit,
            amount,
            None,
            None,
            None,
            true,
            format!("Deposited {:.2}.", amount.round_dp(2)),
        );
        true
    }

    /// Remove cash from the balance
    ///
    /// Rejects non-positive amounts, then amounts exceeding the current
    /// balance (the balance is never allowed to go negative). Always appends
    /// a journal record.
    ///
    /// # Returns
    ///
    /// `true` if the withdrawal was applied, `false` if it was rejected.
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        if amount <= Decimal::ZERO {
            self.record(
                TransactionKind::Withdrawal,
                amount,
                None,
                None,
                None,
                false,
                "Withdrawal amount must be positive.".to_string(),
            );
            return false;
        }

        if self.balance < amount {
            let message = format!(
                "Insufficient funds. Current balance: {:.2}.",
                self.balance.round_dp(2)
            );
            self.record(
                TransactionKind::Withdrawal,
                amount,
                None,
                None,
                None,
                false,
                message,
            );
            return false;
        }

        self.balance -= amount;
        self.record(
            TransactionKind::Withdrawal,
            amount,
            None,
            None,
            None,
            true,
            format!("Withdrew {:.2}.", amount.round_dp(2)),
        );
        true
    }

    /// Buy shares of a symbol at the current quoted price
    ///
    /// The symbol is uppercased before any further processing or recording.
    /// Validation order: quantity, then price lookup, then funds. A zero
    /// quantity is rejected without consulting the price source. A
    /// funds-rejected attempt still records the quantity, quoted price, and
    /// the unaffordable cost. Always appends a journal record.
    ///
    /// # Returns
    ///
    /// `true` if the purchase was applied, `false` if it was rejected.
    pub fn buy_shares(&mut self, symbol: &str, quantity: ShareCount) -> bool {
        let symbol = symbol.to_uppercase();

        if quantity == 0 {
            self.record(
                TransactionKind::Buy,
                Decimal::ZERO,
                Some(symbol),
                Some(quantity),
                None,
                false,
                "Buy quantity must be positive.".to_string(),
            );
            return false;
        }

        let price = self.prices.quote(&symbol);
        if price <= Decimal::ZERO {
            let message = format!(
                "Invalid or unknown symbol '{}'. Price lookup failed or price is zero/negative.",
                symbol
            );
            self.record(
                TransactionKind::Buy,
                Decimal::ZERO,
                Some(symbol),
                Some(quantity),
                None,
                false,
                message,
            );
            return false;
        }

        let cost = price * Decimal::from(quantity);
        if self.balance < cost {
            let message = format!(
                "Insufficient funds to buy {} shares of {}. Cost: {:.2}, Balance: {:.2}.",
                quantity,
                symbol,
                cost.round_dp(2),
                self.balance.round_dp(2)
            );
            self.record(
                TransactionKind::Buy,
                cost,
                Some(symbol),
                Some(quantity),
                Some(price),
                false,
                message,
            );
            return false;
        }

        self.balance -= cost;
        *self.holdings.entry(symbol.clone()).or_insert(0) += quantity;
        let message = format!(
            "Bought {} shares of {} at {:.2} each. Total cost: {:.2}.",
            quantity,
            symbol,
            price.round_dp(2),
            cost.round_dp(2)
        );
        self.record(
            TransactionKind::Buy,
            cost,
            Some(symbol),
            Some(quantity),
            Some(price),
            true,
            message,
        );
        true
    }

    /// Sell held shares of a symbol at the current quoted price
    ///
    /// The symbol is uppercased before any further processing or recording.
    /// Validation order: quantity, then holdings, then price lookup. The
    /// holdings check runs before the price lookup, so selling a symbol that
    /// is not held never consults the price source. When a sale brings a
    /// holding to exactly zero the symbol entry is removed entirely. Always
    /// appends a journal record.
    ///
    /// # Returns
    ///
    /// `true` if the sale was applied, `false` if it was rejected.
    pub fn sell_shares(&mut self, symbol: &str, quantity: ShareCount) -> bool {
        let symbol = symbol.to_uppercase();

        if quantity == 0 {
            self.record(
                TransactionKind::Sell,
                Decimal::ZERO,
                Some(symbol),
                Some(quantity),
                None,
                false,
                "Sell quantity must be positive.".to_string(),
            );
            return false;
        }

        let held = self.holdings.get(&symbol).copied().unwrap_or(0);
        if held < quantity {
            let message = format!(
                "Not enough shares of {} to sell. Have: {}, Trying to sell: {}.",
                symbol, held, quantity
            );
            self.record(
                TransactionKind::Sell,
                Decimal::ZERO,
                Some(symbol),
                Some(quantity),
                None,
                false,
                message,
            );
            return false;
        }

        let price = self.prices.quote(&symbol);
        if price <= Decimal::ZERO {
            let message = format!(
                "Invalid or unknown symbol '{}'. Price lookup failed or price is zero/negative.",
                symbol
            );
            self.record(
                TransactionKind::Sell,
                Decimal::ZERO,
                Some(symbol),
                Some(quantity),
                None,
                false,
                message,
            );
            return false;
        }

        let revenue = price * Decimal::from(quantity);
        self.balance += revenue;
        let remaining = held - quantity;
        if remaining == 0 {
            self.holdings.remove(&symbol);
        } else {
            self.holdings.insert(symbol.clone(), remaining);
        }
        let message = format!(
            "Sold {} shares of {} at {:.2} each. Total revenue: {:.2}.",
            quantity,
            symbol,
            price.round_dp(2),
            revenue.round_dp(2)
        );
        self.record(
            TransactionKind::Sell,
            revenue,
            Some(symbol),
            Some(quantity),
            Some(price),
            true,
            message,
        );
        true
    }

    /// Current cash balance, rounded to 2 decimal places
    pub fn balance(&self) -> Decimal {
        self.balance.round_dp(2)
    }

    /// Defensive copy of the current holdings
    ///
    /// The caller receives an independent map; mutating it cannot affect
    /// the ledger.
    pub fn holdings(&self) -> BTreeMap<String, ShareCount> {
        self.holdings.clone()
    }

    /// Cash balance plus the market value of all holdings
    ///
    /// Each held symbol is valued at its current quote; a symbol whose quote
    /// is not strictly positive contributes zero (it is still counted as
    /// held, just valued at nothing). Rounded to 2 decimal places.
    pub fn portfolio_value(&self) -> Decimal {
        let mut market_value = Decimal::ZERO;
        for (symbol, quantity) in &self.holdings {
            let price = self.prices.quote(symbol);
            if price > Decimal::ZERO {
                market_value += price * Decimal::from(*quantity);
            }
        }
        (self.balance + market_value).round_dp(2)
    }

    /// Portfolio value minus the opening deposit, rounded to 2 decimal places
    pub fn profit_loss(&self) -> Decimal {
        (self.portfolio_value() - self.initial_deposit).round_dp(2)
    }

    /// Defensive copy of the transaction history in chronological order
    pub fn transactions(&self) -> Vec<TransactionRecord> {
        self.journal.records()
    }

    /// The most recently appended journal record, if any
    pub fn last_transaction(&self) -> Option<&TransactionRecord> {
        self.journal.last()
    }

    /// Number of journal records appended so far
    pub fn transaction_count(&self) -> usize {
        self.journal.len()
    }

    /// The immutable opening deposit, rounded to 2 decimal places
    pub fn initial_deposit(&self) -> Decimal {
        self.initial_deposit.round_dp(2)
    }

    /// The injected price source
    pub fn price_source(&self) -> &P {
        &self.prices
    }

    /// Append a journal record reflecting the attempt just made
    ///
    /// Called unconditionally as the final step of every mutating
    /// operation. Captures the post-attempt balance and a snapshot of the
    /// holdings, both as they stand at this moment.
    #[allow(clippy::too_many_arguments)]
    fn record(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        symbol: Option<String>,
        quantity: Option<ShareCount>,
        price_per_share: Option<Decimal>,
        success: bool,
        message: String,
    ) {
        self.journal.append(TransactionRecord {
            kind,
            timestamp: Utc::now(),
            amount: amount.round_dp(2),
            symbol,
            quantity,
            price_per_share: price_per_share.map(|p| p.round_dp(2)),
            success,
            message,
            balance_after: self.balance.round_dp(2),
            holdings_after: self.holdings.clone(),
        });
    }
}
