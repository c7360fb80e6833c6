//! Fixed in-memory price table
//!
//! Simulates a market-data service with a small set of known symbols at
//! fixed prices. A real deployment would replace this with a live quote
//! client behind the same trait.

use crate::pricing::PriceSource;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Price source backed by a fixed symbol table
///
/// Knows six symbols; everything else quotes as `Decimal::ZERO` (unknown).
/// Lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct FixedPriceTable {
    prices: HashMap<String, Decimal>,
}

impl FixedPriceTable {
    /// Create the table with the built-in simulation prices
    pub fn new() -> Self {
        let prices = HashMap::from([
            ("AAPL".to_string(), Decimal::new(17000, 2)),
            ("TSLA".to_string(), Decimal::new(25000, 2)),
            ("GOOGL".to_string(), Decimal::new(14000, 2)),
            ("MSFT".to_string(), Decimal::new(30000, 2)),
            ("AMZN".to_string(), Decimal::new(10000, 2)),
            ("NVDA".to_string(), Decimal::new(50000, 2)),
        ]);
        FixedPriceTable { prices }
    }

    /// Symbols this table can quote, in no particular order
    pub fn known_symbols(&self) -> Vec<&str> {
        self.prices.keys().map(String::as_str).collect()
    }
}

impl Default for FixedPriceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceSource for FixedPriceTable {
    fn quote(&self, symbol: &str) -> Decimal {
        self.prices
            .get(&symbol.to_uppercase())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("AAPL", Decimal::new(17000, 2))]
    #[case("TSLA", Decimal::new(25000, 2))]
    #[case("GOOGL", Decimal::new(14000, 2))]
    #[case("MSFT", Decimal::new(30000, 2))]
    #[case("AMZN", Decimal::new(10000, 2))]
    #[case("NVDA", Decimal::new(50000, 2))]
    fn test_known_symbols_quote(#[case] symbol: &str, #[case] expected: Decimal) {
        let table = FixedPriceTable::new();
        assert_eq!(table.quote(symbol), expected);
    }

    #[rstest]
    #[case::lowercase("aapl")]
    #[case::mixed_case("TsLa")]
    fn test_lookup_is_case_insensitive(#[case] symbol: &str) {
        let table = FixedPriceTable::new();
        assert!(table.quote(symbol) > Decimal::ZERO);
    }

    #[rstest]
    #[case::unknown("XYZ")]
    #[case::empty("")]
    #[case::garbage("not a symbol")]
    fn test_unknown_symbol_quotes_zero(#[case] symbol: &str) {
        let table = FixedPriceTable::new();
        assert_eq!(table.quote(symbol), Decimal::ZERO);
    }

    #[test]
    fn test_known_symbols_lists_all_six() {
        let table = FixedPriceTable::new();
        assert_eq!(table.known_symbols().len(), 6);
    }
}
