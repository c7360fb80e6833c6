//! Interactive console front end
//!
//! A thin, line-oriented front end over the ledger. The session reads
//! commands from any `BufRead` and renders results to any `Write`, so the
//! same code drives an interactive stdin session, a scripted file, and the
//! in-memory buffers used by tests.
//!
//! The front end holds no business logic: every mutating command is passed
//! straight to the ledger and the ledger's own journal message is echoed
//! back, so the user sees the same explanation that was recorded in the
//! history. Malformed input lines are reported and skipped; the session
//! continues with the next line.

pub mod command;

pub use command::Command;

use crate::core::Ledger;
use crate::io::write_transactions_csv;
use crate::pricing::PriceSource;
use crate::types::LedgerError;
use std::fs::File;
use std::io::{BufRead, Write};

/// Console session bound to one ledger
pub struct Session<P: PriceSource> {
    ledger: Ledger<P>,
}

impl<P: PriceSource> Session<P> {
    /// Create a session over an already-constructed ledger
    pub fn new(ledger: Ledger<P>) -> Self {
        Session { ledger }
    }

    /// The underlying ledger, for inspection after the session ends
    pub fn ledger(&self) -> &Ledger<P> {
        &self.ledger
    }

    /// Consume the session and return the ledger
    pub fn into_ledger(self) -> Ledger<P> {
        self.ledger
    }

    /// Run the command loop until end of input or `quit`
    ///
    /// Parse failures are soft: the offending line is reported to `output`
    /// with its line number and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures on `input` or `output`;
    /// business-rule rejections and malformed commands never abort the
    /// session.
    pub fn run<R: BufRead>(&mut self, input: R, output: &mut dyn Write) -> Result<(), LedgerError> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.apply(command, output)?,
                Err(message) => {
                    let error = LedgerError::invalid_command(Some(index as u64 + 1), &message);
                    writeln!(output, "error: {}", error)?;
                }
            }
        }
        Ok(())
    }

    /// Execute one parsed command against the ledger
    fn apply(&mut self, command: Command, output: &mut dyn Write) -> Result<(), LedgerError> {
        match command {
            Command::Deposit(amount) => {
                self.ledger.deposit(amount);
                self.report_last(output)?;
            }
            Command::Withdraw(amount) => {
                self.ledger.withdraw(amount);
                self.report_last(output)?;
            }
            Command::Buy { symbol, quantity } => {
                self.ledger.buy_shares(&symbol, quantity);
                self.report_last(output)?;
            }
            Command::Sell { symbol, quantity } => {
                self.ledger.sell_shares(&symbol, quantity);
                self.report_last(output)?;
            }
            Command::Balance => {
                writeln!(output, "Balance: {:.2}", self.ledger.balance())?;
            }
            Command::Holdings => {
                self.render_holdings(output)?;
            }
            Command::Portfolio => {
                writeln!(output, "Portfolio value: {:.2}", self.ledger.portfolio_value())?;
            }
            Command::ProfitLoss => {
                writeln!(output, "Profit/loss: {:.2}", self.ledger.profit_loss())?;
            }
            Command::Summary => {
                writeln!(output, "Balance: {:.2}", self.ledger.balance())?;
                writeln!(output, "Portfolio value: {:.2}", self.ledger.portfolio_value())?;
                writeln!(output, "Profit/loss: {:.2}", self.ledger.profit_loss())?;
                self.render_holdings(output)?;
            }
            Command::History => {
                self.render_history(output)?;
            }
            Command::Export(path) => {
                let records = self.ledger.transactions();
                let outcome = File::create(&path)
                    .map_err(LedgerError::from)
                    .and_then(|mut file| write_transactions_csv(&records, &mut file));
                match outcome {
                    Ok(()) => writeln!(
                        output,
                        "Exported {} transactions to {}",
                        records.len(),
                        path.display()
                    )?,
                    Err(error) => writeln!(output, "error: {}", error)?,
                }
            }
            Command::Help => {
                self.render_help(output)?;
            }
            // Intercepted by the session loop before apply is reached
            Command::Quit => {}
        }
        Ok(())
    }

    /// Echo the ledger's own message for the attempt just made
    fn report_last(&self, output: &mut dyn Write) -> Result<(), LedgerError> {
        if let Some(record) = self.ledger.last_transaction() {
            writeln!(output, "{}", record.message)?;
        }
        Ok(())
    }

    fn render_holdings(&self, output: &mut dyn Write) -> Result<(), LedgerError> {
        let holdings = self.ledger.holdings();
        if holdings.is_empty() {
            writeln!(output, "No shares held.")?;
        } else {
            for (symbol, quantity) in &holdings {
                writeln!(output, "{}: {} shares", symbol, quantity)?;
            }
        }
        Ok(())
    }

    /// Render every journal record with all of its fields
    fn render_history(&self, output: &mut dyn Write) -> Result<(), LedgerError> {
        for record in self.ledger.transactions() {
            let holdings = crate::io::format_holdings(&record.holdings_after);
            writeln!(
                output,
                "{} | {} | {} | {} | {} | {:.2} | {} | {} | {:.2} | {}",
                record.timestamp.to_rfc3339(),
                record.kind.as_str(),
                record.symbol.as_deref().unwrap_or("-"),
                record
                    .quantity
                    .map(|q| q.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                record
                    .price_per_share
                    .map(|p| format!("{:.2}", p))
                    .unwrap_or_else(|| "-".to_string()),
                record.amount,
                if record.success { "ok" } else { "failed" },
                record.message,
                record.balance_after,
                if holdings.is_empty() { "-".to_string() } else { holdings },
            )?;
        }
        Ok(())
    }

    fn render_help(&self, output: &mut dyn Write) -> Result<(), LedgerError> {
        writeln!(output, "Commands:")?;
        writeln!(output, "  deposit <amount>        add cash to the balance")?;
        writeln!(output, "  withdraw <amount>       remove cash from the balance")?;
        writeln!(output, "  buy <symbol> <qty>      buy shares at the current price")?;
        writeln!(output, "  sell <symbol> <qty>     sell held shares at the current price")?;
        writeln!(output, "  balance                 show the cash balance")?;
        writeln!(output, "  holdings                show the current holdings")?;
        writeln!(output, "  portfolio               show the portfolio value")?;
        writeln!(output, "  pnl                     show the profit/loss")?;
        writeln!(output, "  summary                 show balance, portfolio, pnl, holdings")?;
        writeln!(output, "  history                 show the transaction history")?;
        writeln!(output, "  export <path>           write the history to a CSV file")?;
        writeln!(output, "  quit                    end the session")?;
        Ok(())
    }
}
