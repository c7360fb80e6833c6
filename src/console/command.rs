//! Console command parsing
//!
//! Converts raw input lines into typed [`Command`] values. Parsing is pure
//! (no I/O) so it can be tested without a session. Amount and quantity
//! parsing is strict: a malformed token yields a descriptive error and the
//! session reports it without touching the ledger.

use crate::types::ShareCount;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// A single console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add cash to the balance
    Deposit(Decimal),

    /// Remove cash from the balance
    Withdraw(Decimal),

    /// Buy shares of a symbol
    Buy {
        symbol: String,
        quantity: ShareCount,
    },

    /// Sell held shares of a symbol
    Sell {
        symbol: String,
        quantity: ShareCount,
    },

    /// Show the current cash balance
    Balance,

    /// Show the current holdings
    Holdings,

    /// Show the portfolio value
    Portfolio,

    /// Show the profit/loss versus the opening deposit
    ProfitLoss,

    /// Show balance, holdings, portfolio value, and profit/loss together
    Summary,

    /// Show the full transaction history
    History,

    /// Write the transaction history to a CSV file
    Export(PathBuf),

    /// Show the command reference
    Help,

    /// End the session
    Quit,
}

impl Command {
    /// Parse one input line into a command
    ///
    /// Keywords are case-insensitive and arguments are whitespace-separated.
    /// Blank lines and lines starting with `#` parse to `None` and are
    /// skipped by the session.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Command))` - A recognized command with valid arguments
    /// * `Ok(None)` - Blank line or comment, nothing to do
    /// * `Err(String)` - Error message describing the parse failure
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let mut tokens = line.split_whitespace();
        let keyword = match tokens.next() {
            Some(word) if !word.starts_with('#') => word.to_lowercase(),
            _ => return Ok(None),
        };
        let args: Vec<&str> = tokens.collect();

        let command = match keyword.as_str() {
            "deposit" => Command::Deposit(parse_amount(&keyword, &args)?),
            "withdraw" => Command::Withdraw(parse_amount(&keyword, &args)?),
            "buy" => {
                let (symbol, quantity) = parse_trade(&keyword, &args)?;
                Command::Buy { symbol, quantity }
            }
            "sell" => {
                let (symbol, quantity) = parse_trade(&keyword, &args)?;
                Command::Sell { symbol, quantity }
            }
            "balance" => Command::Balance,
            "holdings" => Command::Holdings,
            "portfolio" => Command::Portfolio,
            "pnl" => Command::ProfitLoss,
            "summary" => Command::Summary,
            "history" => Command::History,
            "export" => match args.first() {
                Some(path) => Command::Export(PathBuf::from(path)),
                None => return Err("export requires a file path".to_string()),
            },
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{}'", other)),
        };

        Ok(Some(command))
    }
}

/// Parse the single amount argument of a cash command
fn parse_amount(keyword: &str, args: &[&str]) -> Result<Decimal, String> {
    let raw = args
        .first()
        .ok_or_else(|| format!("{} requires an amount", keyword))?;
    Decimal::from_str(raw).map_err(|_| format!("invalid amount '{}' for {}", raw, keyword))
}

/// Parse the symbol and quantity arguments of a trade command
fn parse_trade(keyword: &str, args: &[&str]) -> Result<(String, ShareCount), String> {
    let symbol = args
        .first()
        .ok_or_else(|| format!("{} requires a symbol and a quantity", keyword))?;
    let raw_quantity = args
        .get(1)
        .ok_or_else(|| format!("{} requires a quantity", keyword))?;
    let quantity = raw_quantity
        .parse::<ShareCount>()
        .map_err(|_| format!("invalid quantity '{}' for {}", raw_quantity, keyword))?;
    Ok((symbol.to_string(), quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("deposit 100.50", Command::Deposit(Decimal::new(10050, 2)))]
    #[case("DEPOSIT 100.50", Command::Deposit(Decimal::new(10050, 2)))]
    #[case("withdraw 50", Command::Withdraw(Decimal::new(50, 0)))]
    #[case("buy AAPL 5", Command::Buy { symbol: "AAPL".to_string(), quantity: 5 })]
    #[case("buy aapl 5", Command::Buy { symbol: "aapl".to_string(), quantity: 5 })]
    #[case("sell TSLA 2", Command::Sell { symbol: "TSLA".to_string(), quantity: 2 })]
    #[case("balance", Command::Balance)]
    #[case("holdings", Command::Holdings)]
    #[case("portfolio", Command::Portfolio)]
    #[case("pnl", Command::ProfitLoss)]
    #[case("summary", Command::Summary)]
    #[case("history", Command::History)]
    #[case("export out.csv", Command::Export(PathBuf::from("out.csv")))]
    #[case("help", Command::Help)]
    #[case("quit", Command::Quit)]
    #[case("exit", Command::Quit)]
    fn test_parse_valid_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(line).unwrap(), Some(expected));
    }

    #[rstest]
    #[case::blank("")]
    #[case::whitespace("   \t ")]
    #[case::comment("# just a note")]
    fn test_parse_skippable_lines(#[case] line: &str) {
        assert_eq!(Command::parse(line).unwrap(), None);
    }

    #[rstest]
    #[case::unknown_keyword("byu AAPL 5", "unknown command 'byu'")]
    #[case::missing_amount("deposit", "deposit requires an amount")]
    #[case::bad_amount("deposit abc", "invalid amount 'abc' for deposit")]
    #[case::missing_symbol("buy", "buy requires a symbol and a quantity")]
    #[case::missing_quantity("sell AAPL", "sell requires a quantity")]
    #[case::bad_quantity("buy AAPL five", "invalid quantity 'five' for buy")]
    #[case::negative_quantity("buy AAPL -3", "invalid quantity '-3' for buy")]
    #[case::missing_export_path("export", "export requires a file path")]
    fn test_parse_errors(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(Command::parse(line).unwrap_err(), expected);
    }

    #[test]
    fn test_negative_amount_parses_and_is_left_to_the_ledger() {
        // Business validation of amounts belongs to the ledger, not the parser
        assert_eq!(
            Command::parse("deposit -5").unwrap(),
            Some(Command::Deposit(Decimal::new(-5, 0)))
        );
    }
}
