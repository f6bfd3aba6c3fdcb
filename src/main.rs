//! Wallet Ledger CLI
//!
//! Command-line interface for running ledger scripts from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > wallets.csv
//! cargo run -- --format report script.csv
//! cargo run -- --rules rules.csv --log-level info script.csv > wallets.csv
//! ```
//!
//! The program reads ledger operations from the input CSV file, applies them
//! through the command invoker, and writes the final wallet balances to stdout.
//! Logs go to stderr; `RUST_LOG` takes precedence over `--log-level`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unreadable rule file, output not writable, etc.)

use rust_wallet_ledger::cli;
use rust_wallet_ledger::io::load_rule_table;
use rust_wallet_ledger::rules::RuleTable;
use rust_wallet_ledger::runner::ScriptRunner;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let table = match &args.rules {
        Some(path) => load_rule_table(path),
        None => Ok(RuleTable::default()),
    };
    let table = table.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let runner = ScriptRunner::new(table, args.format);
    let mut output = std::io::stdout();
    if let Err(e) = runner.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
