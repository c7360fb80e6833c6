//! Error types for the brokerage ledger
//!
//! Only hard failures are represented here. Business-rule rejections
//! (invalid amount, insufficient funds, insufficient holdings, unknown
//! symbol) are not errors: the operation returns `false` and the appended
//! journal record carries the explanation.
//!
//! # Error Categories
//!
//! - **Construction**: a negative opening deposit prevents the account from
//!   being created at all.
//! - **File I/O Errors**: script file not found, export target not writable.
//! - **CSV Errors**: failures while writing the history export.
//! - **Command Errors**: malformed console input; recoverable inside a
//!   session (the line is reported and skipped).

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the brokerage ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The opening deposit was negative
    ///
    /// This is the only hard failure the ledger itself can raise. No
    /// account is produced.
    #[error("Initial deposit cannot be negative: {amount:.2}")]
    NegativeInitialDeposit {
        /// The rejected opening deposit
        amount: Decimal,
    },

    /// I/O error occurred while reading a script or writing an export
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV error occurred while writing the history export
    #[error("CSV error: {message}")]
    Csv {
        /// Description of the CSV error
        message: String,
    },

    /// A console command could not be parsed
    ///
    /// Recoverable inside a session: the offending line is reported to the
    /// output stream and processing continues with the next line.
    #[error("Invalid command{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidCommand {
        /// Line number where the command appeared (if known)
        line: Option<u64>,
        /// Description of the parse failure
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::Csv {
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a NegativeInitialDeposit error
    pub fn negative_initial_deposit(amount: Decimal) -> Self {
        LedgerError::NegativeInitialDeposit { amount }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(line: Option<u64>, message: &str) -> Self {
        LedgerError::InvalidCommand {
            line,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::negative_deposit(
        LedgerError::NegativeInitialDeposit { amount: Decimal::new(-50000, 2) },
        "Initial deposit cannot be negative: -500.00"
    )]
    #[case::io_error(
        LedgerError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::csv_error(
        LedgerError::Csv { message: "broken pipe".to_string() },
        "CSV error: broken pipe"
    )]
    #[case::invalid_command_with_line(
        LedgerError::InvalidCommand { line: Some(7), message: "unknown command 'byu'".to_string() },
        "Invalid command at line 7: unknown command 'byu'"
    )]
    #[case::invalid_command_without_line(
        LedgerError::InvalidCommand { line: None, message: "unknown command 'byu'".to_string() },
        "Invalid command: unknown command 'byu'"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_helper_constructors() {
        assert_eq!(
            LedgerError::negative_initial_deposit(Decimal::new(-100, 2)),
            LedgerError::NegativeInitialDeposit {
                amount: Decimal::new(-100, 2)
            }
        );
        assert_eq!(
            LedgerError::invalid_command(Some(3), "missing amount"),
            LedgerError::InvalidCommand {
                line: Some(3),
                message: "missing amount".to_string()
            }
        );
    }
}
