//! CSV format handling for ledger scripts, rule files and wallet output
//!
//! This module centralizes all CSV format concerns, providing:
//! - `ScriptRow` for deserializing script rows and `ScriptOp` for the typed operation
//! - `RuleRow` for deserializing rule-table rows
//! - Wallet output serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::core::Wallet;
use crate::rules::RuleDescriptor;
use crate::types::{LedgerError, TransactionKind, WalletType};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// One row of a ledger script
///
/// Columns: `op,wallet,counterparty,amount,currency,kind,category,note,ref`.
/// Which columns an operation reads is documented on [`ScriptOp`].
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ScriptRow {
    pub op: String,
    pub wallet: Option<String>,
    pub counterparty: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub note: Option<String>,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

/// A script operation with its arguments validated and typed
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptOp {
    /// `open`: `wallet`, `kind` (wallet type), `amount` (initial balance), `currency`
    Open {
        wallet: String,
        wallet_type: WalletType,
        initial_balance: Decimal,
        currency: String,
    },
    /// `save`: stores `wallet` under the new name in `counterparty`
    Save { wallet: String, rename: String },
    /// `close`: removes `wallet`
    Close { wallet: String },
    /// `deposit` / `withdraw`: `wallet`, `amount`, optional `currency`, `category`,
    /// `note` and `ref`
    Record {
        wallet: String,
        kind: TransactionKind,
        amount: Decimal,
        currency: Option<String>,
        category: Option<String>,
        note: Option<String>,
        reference: Option<String>,
    },
    /// `transfer`: from `wallet` to `counterparty`, `amount`, optional `currency`,
    /// `note` and `ref`
    Transfer {
        from: String,
        to: String,
        amount: Decimal,
        currency: Option<String>,
        note: Option<String>,
        reference: Option<String>,
    },
    /// `remove`: removes the transaction labelled `ref` from `wallet`
    Remove { wallet: String, reference: String },
    /// `note`: replaces the note of the transaction labelled `ref`; an empty note clears it
    Note {
        wallet: String,
        reference: String,
        note: Option<String>,
    },
    /// `category`: creates `category`, optionally under the parent in `counterparty`
    Category {
        name: String,
        parent: Option<String>,
    },
    /// `drop-category`: removes `category`
    DropCategory { name: String },
    Undo,
    Redo,
}

/// Treat blank cells as absent
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, column: &str, op: &str) -> Result<String, LedgerError> {
    present(value)
        .ok_or_else(|| LedgerError::parse_error(format!("'{}' requires a {} column", op, column)))
}

fn amount(value: Option<String>, op: &str) -> Result<Decimal, LedgerError> {
    let text = present(value)
        .ok_or_else(|| LedgerError::invalid_amount(format!("'{}' requires an amount", op)))?;
    Decimal::from_str(&text)
        .map_err(|_| LedgerError::invalid_amount(format!("'{}' is not a decimal number", text)))
}

/// Convert a ScriptRow to a ScriptOp
///
/// This function:
/// - Parses the operation name (case-insensitive)
/// - Checks that every column the operation needs is present
/// - Parses amounts into Decimals and wallet types into `WalletType`
///
/// # Arguments
///
/// * `row` - The deserialized script row
///
/// # Returns
///
/// * `Ok(ScriptOp)` - Successfully converted operation
/// * `Err(LedgerError)` - `ParseError` for unknown operations or missing columns,
///   `InvalidAmount` for missing or malformed amounts
pub fn convert_script_row(row: ScriptRow) -> Result<ScriptOp, LedgerError> {
    let op = row.op.trim().to_lowercase();
    let op = op.as_str();

    match op {
        "open" => {
            let kind = required(row.kind, "kind", op)?;
            let wallet_type = WalletType::parse(&kind).ok_or_else(|| {
                LedgerError::parse_error(format!("unknown wallet type '{}'", kind))
            })?;
            Ok(ScriptOp::Open {
                wallet: required(row.wallet, "wallet", op)?,
                wallet_type,
                initial_balance: amount(row.amount, op)?,
                currency: required(row.currency, "currency", op)?,
            })
        }
        "save" => Ok(ScriptOp::Save {
            wallet: required(row.wallet, "wallet", op)?,
            rename: required(row.counterparty, "counterparty", op)?,
        }),
        "close" => Ok(ScriptOp::Close {
            wallet: required(row.wallet, "wallet", op)?,
        }),
        "deposit" | "withdraw" => Ok(ScriptOp::Record {
            wallet: required(row.wallet, "wallet", op)?,
            kind: if op == "deposit" {
                TransactionKind::Deposit
            } else {
                TransactionKind::Withdraw
            },
            amount: amount(row.amount, op)?,
            currency: present(row.currency),
            category: present(row.category),
            note: present(row.note),
            reference: present(row.reference),
        }),
        "transfer" => Ok(ScriptOp::Transfer {
            from: required(row.wallet, "wallet", op)?,
            to: required(row.counterparty, "counterparty", op)?,
            amount: amount(row.amount, op)?,
            currency: present(row.currency),
            note: present(row.note),
            reference: present(row.reference),
        }),
        "remove" => Ok(ScriptOp::Remove {
            wallet: required(row.wallet, "wallet", op)?,
            reference: required(row.reference, "ref", op)?,
        }),
        "note" => Ok(ScriptOp::Note {
            wallet: required(row.wallet, "wallet", op)?,
            reference: required(row.reference, "ref", op)?,
            note: present(row.note),
        }),
        "category" => Ok(ScriptOp::Category {
            name: required(row.category, "category", op)?,
            parent: present(row.counterparty),
        }),
        "drop-category" => Ok(ScriptOp::DropCategory {
            name: required(row.category, "category", op)?,
        }),
        "undo" => Ok(ScriptOp::Undo),
        "redo" => Ok(ScriptOp::Redo),
        _ => Err(LedgerError::parse_error(format!(
            "unknown operation '{}'",
            row.op.trim()
        ))),
    }
}

/// One row of a rule file
///
/// Columns: `wallet_type,rule,limit`. `limit` is only read by `max-withdraw`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RuleRow {
    pub wallet_type: String,
    pub rule: String,
    pub limit: Option<String>,
}

/// Convert a RuleRow to the wallet type it configures and the rule it adds
pub fn convert_rule_row(row: RuleRow) -> Result<(WalletType, RuleDescriptor), LedgerError> {
    let wallet_type = WalletType::parse(&row.wallet_type).ok_or_else(|| {
        LedgerError::invalid_rule(&row.rule, format!("unknown wallet type '{}'", row.wallet_type))
    })?;
    let rule = RuleDescriptor::parse(&row.rule, row.limit.as_deref())?;
    Ok((wallet_type, rule))
}

/// Write wallet balances in CSV format
///
/// Writes wallets with columns: wallet, type, balance, currency, transactions.
/// Wallets are sorted by name for deterministic output; balances are written with
/// two decimal places.
///
/// # Arguments
///
/// * `wallets` - Wallets to write
/// * `output` - Writer receiving the CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(LedgerError)` if a write error occurred
pub fn write_wallets_csv(wallets: &[&Wallet], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["wallet", "type", "balance", "currency", "transactions"])?;

    let mut sorted = wallets.to_vec();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));

    for wallet in sorted {
        writer.write_record(&[
            wallet.name().to_string(),
            wallet.wallet_type().to_string(),
            format!("{:.2}", wallet.balance().amount()),
            wallet.balance().currency().to_string(),
            wallet.entries().len().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WalletFactory;
    use crate::types::{Money, Transaction};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn row(op: &str) -> ScriptRow {
        ScriptRow {
            op: op.to_string(),
            ..ScriptRow::default()
        }
    }

    fn cell(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_convert_open() {
        let result = convert_script_row(ScriptRow {
            wallet: cell("main"),
            kind: cell("debit"),
            amount: cell(" 250.50 "),
            currency: cell("eur"),
            ..row("OPEN")
        });

        assert_eq!(
            result,
            Ok(ScriptOp::Open {
                wallet: "main".to_string(),
                wallet_type: WalletType::DebitCard,
                initial_balance: dec!(250.50),
                currency: "eur".to_string(),
            })
        );
    }

    #[rstest]
    #[case::deposit("deposit", TransactionKind::Deposit)]
    #[case::withdraw("withdraw", TransactionKind::Withdraw)]
    #[case::mixed_case("Withdraw", TransactionKind::Withdraw)]
    fn test_convert_record(#[case] op: &str, #[case] expected: TransactionKind) {
        let result = convert_script_row(ScriptRow {
            wallet: cell("main"),
            amount: cell("12.5"),
            category: cell(""),
            note: cell("lunch"),
            reference: cell("t1"),
            ..row(op)
        });

        assert_eq!(
            result,
            Ok(ScriptOp::Record {
                wallet: "main".to_string(),
                kind: expected,
                amount: dec!(12.5),
                currency: None,
                category: None,
                note: Some("lunch".to_string()),
                reference: Some("t1".to_string()),
            })
        );
    }

    #[test]
    fn test_convert_transfer_and_history_ops() {
        let transfer = convert_script_row(ScriptRow {
            wallet: cell("a"),
            counterparty: cell("b"),
            amount: cell("200"),
            ..row("transfer")
        })
        .unwrap();

        assert!(matches!(
            transfer,
            ScriptOp::Transfer { ref from, ref to, amount, .. }
                if from == "a" && to == "b" && amount == dec!(200)
        ));
        assert_eq!(convert_script_row(row("undo")), Ok(ScriptOp::Undo));
        assert_eq!(convert_script_row(row(" redo ")), Ok(ScriptOp::Redo));
    }

    #[rstest]
    #[case::unknown_op(row("explode"), "unknown operation")]
    #[case::open_without_type(
        ScriptRow { wallet: cell("main"), amount: cell("1"), currency: cell("EUR"), ..row("open") },
        "requires a kind column"
    )]
    #[case::open_with_bad_type(
        ScriptRow { wallet: cell("main"), kind: cell("savings"), ..row("open") },
        "unknown wallet type"
    )]
    #[case::deposit_without_amount(ScriptRow { wallet: cell("main"), ..row("deposit") }, "requires an amount")]
    #[case::deposit_bad_amount(
        ScriptRow { wallet: cell("main"), amount: cell("ten"), ..row("deposit") },
        "not a decimal number"
    )]
    #[case::transfer_without_destination(
        ScriptRow { wallet: cell("a"), amount: cell("1"), ..row("transfer") },
        "requires a counterparty column"
    )]
    #[case::remove_without_ref(ScriptRow { wallet: cell("a"), ..row("remove") }, "requires a ref column")]
    #[case::category_without_name(row("category"), "requires a category column")]
    fn test_convert_errors(#[case] input: ScriptRow, #[case] expected: &str) {
        let err = convert_script_row(input).unwrap_err();

        assert!(
            err.to_string().contains(expected),
            "'{}' does not contain '{}'",
            err,
            expected
        );
    }

    #[rstest]
    #[case::no_overdraft("checking", "negative-balance-not-allowed", None, WalletType::Checking, RuleDescriptor::NegativeBalanceNotAllowed)]
    #[case::cap("credit", "max-withdraw", Some("2000"), WalletType::CreditCard, RuleDescriptor::MaxWithdraw { limit: dec!(2000) })]
    fn test_convert_rule_row(
        #[case] wallet_type: &str,
        #[case] rule: &str,
        #[case] limit: Option<&str>,
        #[case] expected_type: WalletType,
        #[case] expected_rule: RuleDescriptor,
    ) {
        let result = convert_rule_row(RuleRow {
            wallet_type: wallet_type.to_string(),
            rule: rule.to_string(),
            limit: limit.map(str::to_string),
        });

        assert_eq!(result, Ok((expected_type, expected_rule)));
    }

    #[test]
    fn test_convert_rule_row_unknown_type() {
        let result = convert_rule_row(RuleRow {
            wallet_type: "savings".to_string(),
            rule: "max-withdraw".to_string(),
            limit: Some("10".to_string()),
        });

        assert!(matches!(result, Err(LedgerError::InvalidRule { .. })));
    }

    #[test]
    fn test_write_wallets_csv_sorted_by_name() {
        let factory = WalletFactory::default();
        let mut zeta = factory.create(
            "zeta",
            WalletType::CreditCard,
            Money::of(dec!(0), "EUR").unwrap(),
        );
        zeta.add_transaction(
            Transaction::builder()
                .amount(Money::of(dec!(19.999), "EUR").unwrap())
                .kind(TransactionKind::Withdraw)
                .build()
                .unwrap(),
        )
        .unwrap();
        let alpha = factory.create(
            "alpha",
            WalletType::Checking,
            Money::of(dec!(1000), "USD").unwrap(),
        );

        let mut output = Vec::new();
        write_wallets_csv(&[&zeta, &alpha], &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "wallet,type,balance,currency,transactions\n\
             alpha,checking,1000.00,USD,0\n\
             zeta,credit-card,-20.00,EUR,1\n"
        );
    }

    #[test]
    fn test_write_wallets_csv_empty() {
        let mut output = Vec::new();
        write_wallets_csv(&[], &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "wallet,type,balance,currency,transactions\n"
        );
    }
}
