//! CSV export of the transaction history
//!
//! This module centralizes the export format for journal records:
//! - Fixed header, one row per record in journal order
//! - Currency columns formatted to 2 decimal places
//! - Absent optional fields written as empty columns
//! - Holdings snapshots flattened as space-separated `SYM:QTY` pairs
//!
//! All functions take a writer rather than a path, so tests can render into
//! an in-memory buffer.

use crate::types::{LedgerError, ShareCount, TransactionRecord};
use std::collections::BTreeMap;
use std::io::Write;

/// Column order of the exported CSV
const HEADER: [&str; 10] = [
    "timestamp",
    "kind",
    "symbol",
    "quantity",
    "price_per_share",
    "amount",
    "success",
    "message",
    "balance_after",
    "holdings_after",
];

/// Flatten a holdings snapshot into a single CSV cell
///
/// Symbols appear in their natural sorted order as `SYM:QTY` pairs joined by
/// spaces; an empty snapshot renders as an empty string.
pub fn format_holdings(holdings: &BTreeMap<String, ShareCount>) -> String {
    holdings
        .iter()
        .map(|(symbol, quantity)| format!("{}:{}", symbol, quantity))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write the transaction history to CSV
///
/// # Arguments
///
/// * `records` - Journal records in chronological order
/// * `output` - Destination writer
///
/// # Errors
///
/// Returns `LedgerError::Csv` or `LedgerError::Io` if writing fails.
pub fn write_transactions_csv(
    records: &[TransactionRecord],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record(&[
            record.timestamp.to_rfc3339(),
            record.kind.as_str().to_string(),
            record.symbol.clone().unwrap_or_default(),
            record
                .quantity
                .map(|q| q.to_string())
                .unwrap_or_default(),
            record
                .price_per_share
                .map(|p| format!("{:.2}", p))
                .unwrap_or_default(),
            format!("{:.2}", record.amount),
            record.success.to_string(),
            record.message.clone(),
            format!("{:.2}", record.balance_after),
            format_holdings(&record.holdings_after),
        ])?;
    }

    writer.flush().map_err(LedgerError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn buy_record() -> TransactionRecord {
        TransactionRecord {
            kind: TransactionKind::Buy,
            timestamp: Utc::now(),
            amount: Decimal::new(85000, 2),
            symbol: Some("AAPL".to_string()),
            quantity: Some(5),
            price_per_share: Some(Decimal::new(17000, 2)),
            success: true,
            message: "Bought 5 shares of AAPL at 170.00 each. Total cost: 850.00.".to_string(),
            balance_after: Decimal::new(65000, 2),
            holdings_after: BTreeMap::from([("AAPL".to_string(), 5)]),
        }
    }

    fn failed_deposit_record() -> TransactionRecord {
        TransactionRecord {
            kind: TransactionKind::Deposit,
            timestamp: Utc::now(),
            amount: Decimal::ZERO,
            symbol: None,
            quantity: None,
            price_per_share: None,
            success: false,
            message: "Deposit amount must be positive.".to_string(),
            balance_after: Decimal::new(100000, 2),
            holdings_after: BTreeMap::new(),
        }
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let records = vec![buy_record(), failed_deposit_record()];
        let mut output = Vec::new();

        write_transactions_csv(&records, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "timestamp,kind,symbol,quantity,price_per_share,amount,success,message,\
             balance_after,holdings_after"
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_export_formats_trade_fields() {
        let mut output = Vec::new();
        write_transactions_csv(&[buy_record()], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.contains(",buy,AAPL,5,170.00,850.00,true,"));
        assert!(row.ends_with(",650.00,AAPL:5"));
    }

    #[test]
    fn test_export_leaves_absent_optionals_empty() {
        let mut output = Vec::new();
        write_transactions_csv(&[failed_deposit_record()], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let row = text.lines().nth(1).unwrap();
        // symbol, quantity, and price columns are empty for cash operations
        assert!(row.contains(",deposit,,,,0.00,false,"));
    }

    #[test]
    fn test_export_of_empty_history_is_header_only() {
        let mut output = Vec::new();
        write_transactions_csv(&[], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_format_holdings_sorted_pairs() {
        let holdings = BTreeMap::from([
            ("TSLA".to_string(), 10),
            ("AAPL".to_string(), 5),
        ]);
        assert_eq!(format_holdings(&holdings), "AAPL:5 TSLA:10");
        assert_eq!(format_holdings(&BTreeMap::new()), "");
    }
}
