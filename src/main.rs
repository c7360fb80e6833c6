//! Brokerage Ledger CLI
//!
//! Interactive front end for the simulated brokerage account.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --deposit 1000
//! cargo run -- --deposit 1000 --script session.txt
//! cargo run -- --deposit 1000 --export history.csv
//! ```
//!
//! The program constructs one account with the given opening deposit, then
//! reads commands from stdin (or the script file) and prints results to
//! stdout. On exit it optionally writes the full transaction history to a
//! CSV file.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (negative opening deposit, script not readable, export failed)

use brokerage_ledger::cli;
use brokerage_ledger::console::Session;
use brokerage_ledger::core::Ledger;
use brokerage_ledger::io::write_transactions_csv;
use brokerage_ledger::pricing::{FixedPriceTable, PriceSource};
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    let args = cli::parse_args();

    let prices = FixedPriceTable::new();
    let ledger = match Ledger::new(args.initial_deposit, prices) {
        Ok(ledger) => ledger,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut session = Session::new(ledger);
    let mut output = io::stdout();

    if args.script.is_none() {
        print_banner(session.ledger().price_source());
    }

    let result = match &args.script {
        Some(path) => match File::open(path) {
            Ok(file) => session.run(BufReader::new(file), &mut output),
            Err(e) => {
                eprintln!("Error: failed to open script {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            session.run(stdin.lock(), &mut output)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Some(path) = &args.export {
        let records = session.ledger().transactions();
        let outcome = File::create(path)
            .map_err(brokerage_ledger::types::LedgerError::from)
            .and_then(|mut file| write_transactions_csv(&records, &mut file));
        if let Err(e) = outcome {
            eprintln!("Error: failed to export to {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}

/// Print the interactive greeting with the quotable symbols
fn print_banner(prices: &FixedPriceTable) {
    let mut symbols: Vec<&str> = prices.known_symbols();
    symbols.sort_unstable();
    let listing: Vec<String> = symbols
        .iter()
        .map(|symbol| format!("{} ({:.2})", symbol, prices.quote(symbol)))
        .collect();
    println!("Brokerage account ready. Known symbols: {}.", listing.join(", "));
    println!("Type 'help' for commands.");
}
