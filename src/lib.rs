//! Rust Wallet Ledger Library
//! # Overview
//!
//! This library provides a personal-finance ledger: wallets holding a running
//! balance, transactions that change it, and a command layer that makes every change
//! reversible through undo and redo.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core value types (Money, Transaction, Category, errors)
//! - [`rules`] - Pluggable checks run before every balance change, and the table
//!   that assigns them to wallet types
//! - [`core`] - Domain components:
//!   - [`core::wallet`] - The wallet aggregate, the only place a balance changes
//!   - [`core::factory`] - Wallet construction from a rule table
//!   - [`core::ledger`] - Wallet and category storage behind repository ports
//!   - [`core::report`] - Entity walking and the text report
//! - [`command`] - Reversible commands and the undo/redo invoker
//! - [`io`] - CSV scripts, rule files and wallet output
//! - [`runner`] - Runs a CSV script through the invoker
//! - [`cli`] - CLI arguments parsing
//!
//! # Transaction Kinds
//!
//! - **Deposit**: Adds to a wallet's balance
//! - **Withdraw**: Subtracts from a wallet's balance, subject to the wallet's rules
//! - **Transfer**: Recorded on two wallets at once, as a withdrawal leg on the
//!   source and a deposit leg on the destination
//!
//! # Wallet Invariant
//!
//! A wallet's balance always equals its initial balance plus the net effect of the
//! transactions in its ledger. [`core::Wallet::audit`] checks it.
//!
//! # Example
//!
//! ```
//! use rust_wallet_ledger::command::{AddTransactionCommand, CommandInvoker, CreateWalletCommand};
//! use rust_wallet_ledger::core::Ledger;
//! use rust_wallet_ledger::types::{Money, Transaction, TransactionKind, WalletType};
//!
//! let mut ledger = Ledger::new();
//! let mut invoker = CommandInvoker::new();
//!
//! let create = CreateWalletCommand::new(
//!     ledger.factory(),
//!     "main",
//!     WalletType::Checking,
//!     Money::parse("1000.00", "EUR").unwrap(),
//! );
//! let wallet = create.wallet_id();
//! invoker.execute(&mut ledger, create).unwrap();
//!
//! let deposit = Transaction::builder()
//!     .amount(Money::parse("50.005", "EUR").unwrap())
//!     .kind(TransactionKind::Deposit)
//!     .build()
//!     .unwrap();
//! invoker
//!     .execute(&mut ledger, AddTransactionCommand::new(wallet, Some(deposit)).unwrap())
//!     .unwrap();
//! assert_eq!(ledger.wallet(wallet).unwrap().balance().to_string(), "1050.00 EUR");
//!
//! invoker.undo(&mut ledger).unwrap();
//! assert_eq!(ledger.wallet(wallet).unwrap().balance().to_string(), "1000.00 EUR");
//! ```

// Module declarations
pub mod cli;
pub mod command;
pub mod core;
pub mod io;
pub mod rules;
pub mod runner;
pub mod types;

pub use command::{Command, CommandInvoker};
pub use crate::core::{Ledger, Wallet, WalletFactory};
pub use io::write_wallets_csv;
pub use runner::ScriptRunner;
pub use types::{
    Category, CategoryId, Currency, LedgerError, Money, Transaction, TransactionId,
    TransactionKind, WalletId, WalletType,
};
