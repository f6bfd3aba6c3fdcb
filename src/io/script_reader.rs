//! Ledger script reader with iterator interface
//!
//! Provides a streaming iterator over script operations from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! ScriptReader implements the Iterator trait, yielding `Result<ScriptOp, LedgerError>`
//! for each CSV row:
//!
//! ```no_run
//! use rust_wallet_ledger::io::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::new(Path::new("script.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(op) => println!("Running {:?}", op),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Individual row errors are yielded as Err variants; parse errors carry the line
//!   number of the offending row

use crate::io::csv_format::{convert_script_row, ScriptOp, ScriptRow};
use crate::types::LedgerError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Streaming reader over ledger script rows
#[derive(Debug)]
pub struct ScriptReader<R: Read = File> {
    reader: csv::Reader<R>,
    line_num: u64,
}

impl ScriptReader<File> {
    /// Open a script file
    ///
    /// The CSV reader is configured to trim whitespace from all fields and to
    /// accept rows with fewer columns than the header, so `undo` and `redo` rows
    /// can be written as a single cell.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| LedgerError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ScriptReader<R> {
    /// Read a script from any byte source
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            reader,
            line_num: 1,
        }
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<ScriptOp, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut rows = self.reader.deserialize::<ScriptRow>();
        let row = rows.next()?;
        self.line_num += 1;

        Some(match row {
            Ok(row) => convert_script_row(row).map_err(|e| e.at_line(self.line_num)),
            Err(e) => Err(LedgerError::from(e).at_line(self.line_num)),
        })
    }
}
