//! Script runner
//!
//! Drives a ledger script end to end: reads operations with the
//! [`ScriptReader`], applies them through a [`Session`], and writes the final
//! state of every wallet.
//!
//! # Error Handling
//!
//! Fatal errors (script not found, output not writable) are returned. A row that
//! fails to parse or is rejected by the ledger is logged with `tracing::warn!` and
//! skipped; the run continues with the next row.

pub mod session;

pub use session::Session;

use crate::cli::OutputFormat;
use crate::core::{Ledger, TextReport};
use crate::io::{write_wallets_csv, ScriptOp, ScriptReader};
use crate::rules::RuleTable;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;

/// Runs ledger scripts with a fixed rule table and output format
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    table: RuleTable,
    format: OutputFormat,
}

impl ScriptRunner {
    pub fn new(table: RuleTable, format: OutputFormat) -> Self {
        ScriptRunner { table, format }
    }

    /// Run the script at `input_path` and write the result to `output`
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the CSV script
    /// * `output` - Writer receiving the wallet CSV or the text report
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be opened or the output cannot be
    /// written. Row-level failures are not errors.
    pub fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError> {
        let reader = ScriptReader::new(input_path)?;
        let session = self.run(reader);
        self.write(session.ledger(), output)
    }

    /// Apply every operation from `ops` to a fresh session
    pub fn run<I>(&self, ops: I) -> Session
    where
        I: IntoIterator<Item = Result<ScriptOp, LedgerError>>,
    {
        let mut session = Session::new(Ledger::with_rule_table(self.table.clone()));
        let mut applied = 0usize;
        let mut skipped = 0usize;

        for result in ops {
            match result.and_then(|op| session.apply(op)) {
                Ok(()) => applied += 1,
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(error = %e, "skipping script row");
                }
            }
        }

        tracing::info!(applied, skipped, "script finished");
        session
    }

    /// Write the ledger in the configured output format
    pub fn write(&self, ledger: &Ledger, output: &mut dyn Write) -> Result<(), LedgerError> {
        match self.format {
            OutputFormat::Csv => write_wallets_csv(&ledger.wallets(), output),
            OutputFormat::Report => {
                output.write_all(TextReport::render_ledger(ledger).as_bytes())?;
                output.flush()?;
                Ok(())
            }
        }
    }
}

impl Default for ScriptRunner {
    fn default() -> Self {
        ScriptRunner::new(RuleTable::default(), OutputFormat::Csv)
    }
}
