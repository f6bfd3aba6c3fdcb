//! Persistence ports
//!
//! The ledger talks to storage only through these traits. The crate ships
//! in-memory implementations in [`repository`](crate::core::repository); database
//! adapters live outside the crate and plug in through the same interfaces.

use crate::core::wallet::Wallet;
use crate::types::{Category, CategoryId, LedgerError, WalletId};
use std::fmt;

/// Storage for wallets
pub trait WalletRepository: fmt::Debug {
    /// Insert or replace a wallet, returning the version it replaced
    fn upsert(&mut self, wallet: Wallet) -> Result<Option<Wallet>, LedgerError>;

    /// Look up a wallet by identifier
    fn find_by_id(&self, id: WalletId) -> Option<&Wallet>;

    /// Look up a wallet by identifier for mutation
    fn find_by_id_mut(&mut self, id: WalletId) -> Option<&mut Wallet>;

    /// Remove a wallet, returning it
    ///
    /// Fails with `WalletNotFound` if no such wallet is stored.
    fn remove(&mut self, id: WalletId) -> Result<Wallet, LedgerError>;

    /// All stored wallets
    fn wallets(&self) -> Vec<&Wallet>;
}

/// Storage for categories
pub trait CategoryRepository: fmt::Debug {
    /// Insert or replace a category
    ///
    /// Fails with `DuplicateCategory` if another category already uses the name.
    fn save(&mut self, category: Category) -> Result<(), LedgerError>;

    fn find_by_id(&self, id: CategoryId) -> Option<&Category>;

    fn find_by_name(&self, name: &str) -> Option<&Category>;

    /// Delete a category, returning it
    ///
    /// Fails with `CategoryNotFound` if it does not exist and with
    /// `LinkedToOtherObject` while sub-categories still point at it.
    fn delete(&mut self, id: CategoryId) -> Result<Category, LedgerError>;

    /// All stored categories
    fn categories(&self) -> Vec<&Category>;
}
