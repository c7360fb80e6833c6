//! Price lookup for trade and valuation operations
//!
//! The ledger never fetches prices itself; it asks an injected [`PriceSource`]
//! implementation. This keeps the quote seam swappable: the built-in
//! [`FixedPriceTable`] serves the simulation, and tests substitute recording
//! doubles at the same call sites.

pub mod table;

pub use table::FixedPriceTable;

use rust_decimal::Decimal;

/// Source of current share prices
///
/// Implementations must be deterministic for a fixed symbol within a single
/// operation: the ledger calls [`quote`](PriceSource::quote) at most once per
/// trade and uses that single value for all of that trade's accounting.
pub trait PriceSource {
    /// Current quote for `symbol`, matched case-insensitively
    ///
    /// Returns `Decimal::ZERO` as a sentinel when the symbol is unknown or
    /// no price can be retrieved. Callers treat any quote that is not
    /// strictly positive as "no price available".
    fn quote(&self, symbol: &str) -> Decimal;
}
