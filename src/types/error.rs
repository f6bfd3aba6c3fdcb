//! Error types for the wallet ledger
//!
//! This module defines every error that can occur while building money values,
//! mutating wallets, or running commands through the invoker.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Value Errors**: invalid amounts, invalid or mismatched currencies
//! - **Policy Errors**: insufficient funds, amounts over a withdrawal cap
//! - **Command Errors**: missing payloads, wrong transaction kinds, lookups that failed
//! - **Script Errors**: file I/O and CSV parsing

use crate::types::money::Money;
use crate::types::transaction::{TransactionId, TransactionKind};
use crate::types::wallet_type::WalletId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the wallet ledger
///
/// Every domain failure aborts the current operation without partial mutation.
/// The only exception is [`LedgerError::TransferFailed`], which is raised after
/// the first leg of a transfer has already been compensated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is missing, malformed, or not acceptable for the operation
    #[error("Invalid amount: {reason}")]
    InvalidAmount {
        /// Why the amount was rejected
        reason: String,
    },

    /// Currency code is missing or malformed
    #[error("Invalid currency '{currency}'")]
    InvalidCurrency {
        /// The rejected currency code
        currency: String,
    },

    /// Arithmetic or comparison across two different currencies
    #[error("Cannot operate on different currencies: {expected} vs {actual}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand
        expected: String,
        /// Currency of the right-hand operand
        actual: String,
    },

    /// An outflow would drive the wallet balance below zero
    #[error("Insufficient funds in wallet {wallet}: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Wallet that rejected the movement
        wallet: WalletId,
        /// Balance at the time of the check
        available: Money,
        /// Amount of the rejected movement
        requested: Money,
    },

    /// An outflow exceeds the wallet's withdrawal cap
    #[error("Amount {requested} exceeds the withdrawal limit of {limit} for wallet {wallet}")]
    AmountNotAllowed {
        /// Wallet that rejected the movement
        wallet: WalletId,
        /// Configured cap
        limit: Decimal,
        /// Amount of the rejected movement
        requested: Money,
    },

    /// A command received no transaction where one was required
    #[error("Transaction is required for {operation}")]
    TransactionNull {
        /// Operation that was missing its payload
        operation: String,
    },

    /// Transaction kind is incompatible with the operation, or missing entirely
    #[error(
        "Invalid transaction type {} for {operation}",
        kind.map(|k| format!("'{}'", k)).unwrap_or_else(|| "(missing)".to_string())
    )]
    InvalidTransactionType {
        /// The offending kind (`None` when no kind was given)
        kind: Option<TransactionKind>,
        /// Operation that rejected it
        operation: String,
    },

    /// Wallet lookup failed
    #[error("Wallet {wallet} not found")]
    WalletNotFound {
        /// Identifier or name used for the lookup
        wallet: String,
    },

    /// Category lookup failed
    #[error("Category {category} not found")]
    CategoryNotFound {
        /// Identifier or name used for the lookup
        category: String,
    },

    /// Transaction is not part of the wallet's ledger
    #[error("Transaction {tx} not found in wallet {wallet}")]
    TransactionNotFound {
        /// Transaction identifier
        tx: TransactionId,
        /// Wallet that was searched
        wallet: WalletId,
    },

    /// Deletion blocked by objects that still reference the target
    #[error("Category {category} is still referenced by {references} other object(s)")]
    LinkedToOtherObject {
        /// Category that could not be deleted
        category: String,
        /// Number of transactions and sub-categories referencing it
        references: usize,
    },

    /// The same transaction was recorded twice in one ledger
    #[error("Duplicate transaction {tx} in wallet {wallet}")]
    DuplicateTransaction {
        /// Transaction identifier
        tx: TransactionId,
        /// Wallet whose ledger already holds it
        wallet: WalletId,
    },

    /// A category with the same name already exists
    #[error("Category '{name}' already exists")]
    DuplicateCategory {
        /// Conflicting name
        name: String,
    },

    /// Transfer source and destination are the same wallet
    #[error("Cannot transfer from wallet {wallet} to itself")]
    SameWallet {
        /// The wallet used on both sides
        wallet: WalletId,
    },

    /// The deposit leg of a transfer failed; the withdrawal leg was rolled back
    #[error("Transfer from {from} to {to} failed and was rolled back: {cause}")]
    TransferFailed {
        /// Source wallet
        from: WalletId,
        /// Destination wallet
        to: WalletId,
        /// Error raised by the deposit leg
        #[source]
        cause: Box<LedgerError>,
    },

    /// Decimal arithmetic overflowed
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Wallet balance disagrees with the net effect of its ledger
    #[error("Balance mismatch in wallet {wallet}: expected {expected}, found {actual}")]
    BalanceMismatch {
        /// Audited wallet
        wallet: WalletId,
        /// Balance recomputed from the ledger
        expected: Money,
        /// Balance currently held
        actual: Money,
    },

    /// Rule descriptor could not be understood
    #[error("Invalid rule '{rule}': {reason}")]
    InvalidRule {
        /// Rule name as written
        rule: String,
        /// Description of the problem
        reason: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed row is skipped
    /// and the script continues with the next row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        LedgerError::InvalidAmount {
            reason: reason.into(),
        }
    }

    /// Create an InvalidCurrency error
    pub fn invalid_currency(currency: &str) -> Self {
        LedgerError::InvalidCurrency {
            currency: currency.to_string(),
        }
    }

    /// Create a CurrencyMismatch error
    pub fn currency_mismatch(expected: &str, actual: &str) -> Self {
        LedgerError::CurrencyMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(wallet: WalletId, available: Money, requested: Money) -> Self {
        LedgerError::InsufficientFunds {
            wallet,
            available,
            requested,
        }
    }

    /// Create an AmountNotAllowed error
    pub fn amount_not_allowed(wallet: WalletId, limit: Decimal, requested: Money) -> Self {
        LedgerError::AmountNotAllowed {
            wallet,
            limit,
            requested,
        }
    }

    /// Create a TransactionNull error
    pub fn transaction_null(operation: &str) -> Self {
        LedgerError::TransactionNull {
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidTransactionType error
    pub fn invalid_transaction_type(kind: Option<TransactionKind>, operation: &str) -> Self {
        LedgerError::InvalidTransactionType {
            kind,
            operation: operation.to_string(),
        }
    }

    /// Create a WalletNotFound error
    pub fn wallet_not_found(wallet: impl ToString) -> Self {
        LedgerError::WalletNotFound {
            wallet: wallet.to_string(),
        }
    }

    /// Create a CategoryNotFound error
    pub fn category_not_found(category: impl ToString) -> Self {
        LedgerError::CategoryNotFound {
            category: category.to_string(),
        }
    }

    /// Create a TransactionNotFound error
    pub fn transaction_not_found(tx: TransactionId, wallet: WalletId) -> Self {
        LedgerError::TransactionNotFound { tx, wallet }
    }

    /// Create a LinkedToOtherObject error
    pub fn linked_to_other_object(category: impl ToString, references: usize) -> Self {
        LedgerError::LinkedToOtherObject {
            category: category.to_string(),
            references,
        }
    }

    /// Create a DuplicateTransaction error
    pub fn duplicate_transaction(tx: TransactionId, wallet: WalletId) -> Self {
        LedgerError::DuplicateTransaction { tx, wallet }
    }

    /// Create a DuplicateCategory error
    pub fn duplicate_category(name: &str) -> Self {
        LedgerError::DuplicateCategory {
            name: name.to_string(),
        }
    }

    /// Create a TransferFailed error wrapping the deposit-leg cause
    pub fn transfer_failed(from: WalletId, to: WalletId, cause: LedgerError) -> Self {
        LedgerError::TransferFailed {
            from,
            to,
            cause: Box::new(cause),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidRule error
    pub fn invalid_rule(rule: &str, reason: impl Into<String>) -> Self {
        LedgerError::InvalidRule {
            rule: rule.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a ParseError without line information
    pub fn parse_error(message: impl Into<String>) -> Self {
        LedgerError::ParseError {
            line: None,
            message: message.into(),
        }
    }

    /// Attach a line number to a ParseError that has none; other errors pass through
    pub fn at_line(self, line: u64) -> Self {
        match self {
            LedgerError::ParseError { line: None, message } => LedgerError::ParseError {
                line: Some(line),
                message,
            },
            other => other,
        }
    }
}
