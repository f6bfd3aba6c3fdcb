//! Reversible ledger commands
//!
//! Every mutation of a [`Ledger`] outside of tests goes through a [`Command`]. A
//! command knows how to apply its effect and how to exactly revert it; the
//! [`CommandInvoker`] keeps the undo and redo history.
//!
//! - `wallet` - Create, save and remove wallets
//! - `transaction` - Add, remove and amend deposits and withdrawals
//! - `transfer` - Two-leg compensating transfer between wallets
//! - `category` - Create and remove categories
//! - `invoker` - Undo/redo history

pub mod category;
pub mod invoker;
pub mod transaction;
pub mod transfer;
pub mod wallet;

use crate::core::Ledger;
use crate::types::LedgerError;
use std::fmt;

pub use category::{CreateCategoryCommand, RemoveCategoryCommand};
pub use invoker::CommandInvoker;
pub use transaction::{AddTransactionCommand, AmendTransactionCommand, RemoveTransactionCommand};
pub use transfer::TransferCommand;
pub use wallet::{CreateWalletCommand, RemoveWalletCommand, SaveWalletCommand};

/// A unit of reversible work
///
/// `undo` is only ever called after a successful `execute`, and `execute` again
/// only after a successful `undo` (redo). Implementations may rely on that ordering
/// to keep whatever state they need for the reversal.
pub trait Command: fmt::Debug {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Apply the command's effect to `ledger`
    ///
    /// # Errors
    ///
    /// On error the ledger must be left as it was before the call.
    fn execute(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError>;

    /// Revert the effect of the last successful `execute`
    fn undo(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError>;
}
