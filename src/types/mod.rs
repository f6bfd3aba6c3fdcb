//! Types module
//!
//! Contains the value types used throughout the ledger.
//! This module organizes types into logical submodules:
//! - `money`: Currency-checked decimal amounts
//! - `transaction`: Transactions, their kinds, and the validating builder
//! - `category`: Reporting categories
//! - `wallet_type`: Wallet identifiers and wallet types
//! - `error`: Error types for the ledger

pub mod category;
pub mod error;
pub mod money;
pub mod transaction;
pub mod wallet_type;

pub use category::{Category, CategoryId};
pub use error::LedgerError;
pub use money::{Currency, Money};
pub use transaction::{Transaction, TransactionBuilder, TransactionId, TransactionKind};
pub use wallet_type::{WalletId, WalletType};
