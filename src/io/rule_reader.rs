//! Rule table loading
//!
//! A rule file lists, per wallet type, the rules new wallets of that type get, in
//! order:
//!
//! ```text
//! wallet_type,rule,limit
//! checking,negative-balance-not-allowed,
//! checking,max-withdraw,2500.00
//! credit-card,max-withdraw,500
//! ```
//!
//! Wallet types without rows get no rules. Unlike script rows, a bad rule row
//! aborts loading: running with half a policy is worse than not running.

use crate::io::csv_format::{convert_rule_row, RuleRow};
use crate::rules::RuleTable;
use crate::types::LedgerError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a rule table from a CSV file
///
/// # Errors
///
/// - `IoError` if the file cannot be opened
/// - `ParseError` for malformed CSV
/// - `InvalidRule` for unknown wallet types, unknown rules or bad limits
pub fn load_rule_table(path: &Path) -> Result<RuleTable, LedgerError> {
    let file = File::open(path).map_err(|e| LedgerError::IoError {
        message: format!("Failed to open rule file '{}': {}", path.display(), e),
    })?;
    read_rule_table(file)
}

/// Read a rule table from any byte source
pub fn read_rule_table<R: Read>(source: R) -> Result<RuleTable, LedgerError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let mut table = RuleTable::empty();
    for row in reader.deserialize::<RuleRow>() {
        let (wallet_type, rule) = convert_rule_row(row?)?;
        table.push(wallet_type, rule);
    }

    tracing::debug!(?table, "rule table loaded");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleDescriptor;
    use crate::types::WalletType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_rule_table_keeps_order_per_type() {
        let table = read_rule_table(
            "wallet_type,rule,limit\n\
             checking,max-withdraw,2500.00\n\
             checking,no-overdraft,\n\
             credit,max-withdraw,500\n"
                .as_bytes(),
        )
        .unwrap();

        assert_eq!(
            table.rules_for(WalletType::Checking),
            &[
                RuleDescriptor::MaxWithdraw { limit: dec!(2500) },
                RuleDescriptor::NegativeBalanceNotAllowed,
            ]
        );
        assert_eq!(
            table.rules_for(WalletType::CreditCard),
            &[RuleDescriptor::MaxWithdraw { limit: dec!(500) }]
        );
        assert!(table.rules_for(WalletType::DebitCard).is_empty());
    }

    #[test]
    fn test_read_rule_table_rejects_bad_rows() {
        let result = read_rule_table("wallet_type,rule,limit\nchecking,max-withdraw,\n".as_bytes());

        assert!(matches!(result, Err(LedgerError::InvalidRule { .. })));
    }

    #[test]
    fn test_load_rule_table_missing_file() {
        let result = load_rule_table(Path::new("no-such-rules.csv"));

        assert!(matches!(result, Err(LedgerError::IoError { .. })));
    }
}
