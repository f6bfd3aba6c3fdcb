//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, wallet output serialization)
//! - `script_reader` - Ledger script reader with iterator interface
//! - `rule_reader` - Rule table loading

pub mod csv_format;
pub mod rule_reader;
pub mod script_reader;

pub use csv_format::{
    convert_rule_row, convert_script_row, write_wallets_csv, RuleRow, ScriptOp, ScriptRow,
};
pub use rule_reader::{load_rule_table, read_rule_table};
pub use script_reader::ScriptReader;
