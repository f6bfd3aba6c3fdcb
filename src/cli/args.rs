use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Run a wallet ledger script and print the resulting balances
#[derive(Parser, Debug)]
#[command(name = "wallet-ledger")]
#[command(about = "Run a wallet ledger script and print the resulting balances", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing the ledger script
    #[arg(value_name = "INPUT", help = "Path to the input CSV script")]
    pub input_file: PathBuf,

    /// Rule table file overriding the built-in wallet rules
    #[arg(
        long = "rules",
        value_name = "FILE",
        help = "CSV file with wallet_type,rule,limit rows (default: built-in rules)"
    )]
    pub rules: Option<PathBuf>,

    /// Output format
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "csv",
        help = "Output format: 'csv' for wallet balances or 'report' for a text report"
    )]
    pub format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level or filter directive, e.g. 'info' or 'rust_wallet_ledger=debug'"
    )]
    pub log_level: String,
}

/// Available output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Report,
}
