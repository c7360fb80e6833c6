use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Simulated brokerage account with cash, holdings, and a transaction journal
#[derive(Parser, Debug)]
#[command(name = "brokerage-ledger")]
#[command(
    about = "Simulated brokerage account with cash, holdings, and a transaction journal",
    long_about = None
)]
pub struct CliArgs {
    /// Opening cash deposit for the account
    #[arg(
        long = "deposit",
        value_name = "AMOUNT",
        default_value = "0",
        allow_negative_numbers = true,
        help = "Opening cash deposit (must not be negative)"
    )]
    pub initial_deposit: Decimal,

    /// Command script to run instead of reading stdin
    #[arg(
        long = "script",
        value_name = "PATH",
        help = "Run commands from a script file instead of stdin"
    )]
    pub script: Option<PathBuf>,

    /// CSV export target written after the session ends
    #[arg(
        long = "export",
        value_name = "PATH",
        help = "Write the transaction history to this CSV file on exit"
    )]
    pub export: Option<PathBuf>,
}
