//! Ledger context
//!
//! This module provides the `Ledger`, the application context every command runs
//! against. It bundles the wallet repository, the category repository and the
//! wallet factory, and enforces the cross-aggregate checks no single wallet can
//! make on its own (category references).

use crate::core::factory::WalletFactory;
use crate::core::repository::{InMemoryCategoryRepository, InMemoryWalletRepository};
use crate::core::traits::{CategoryRepository, WalletRepository};
use crate::core::wallet::Wallet;
use crate::rules::RuleTable;
use crate::types::{Category, CategoryId, LedgerError, WalletId};

/// Wallets, categories and the factory that builds wallets
#[derive(Debug)]
pub struct Ledger {
    wallets: Box<dyn WalletRepository>,
    categories: Box<dyn CategoryRepository>,
    factory: WalletFactory,
}

impl Ledger {
    /// Create an empty in-memory ledger with the default rule table
    pub fn new() -> Self {
        Self::with_rule_table(RuleTable::default())
    }

    /// Create an empty in-memory ledger whose factory uses `table`
    pub fn with_rule_table(table: RuleTable) -> Self {
        Self::with_repositories(
            Box::new(InMemoryWalletRepository::new()),
            Box::new(InMemoryCategoryRepository::new()),
            WalletFactory::new(table),
        )
    }

    /// Create a ledger on top of caller-supplied storage
    ///
    /// # Arguments
    ///
    /// * `wallets` - Wallet storage
    /// * `categories` - Category storage
    /// * `factory` - Factory used by commands that create wallets
    pub fn with_repositories(
        wallets: Box<dyn WalletRepository>,
        categories: Box<dyn CategoryRepository>,
        factory: WalletFactory,
    ) -> Self {
        Ledger {
            wallets,
            categories,
            factory,
        }
    }

    pub fn factory(&self) -> &WalletFactory {
        &self.factory
    }

    /// Look up a wallet
    ///
    /// # Errors
    ///
    /// Returns `WalletNotFound` if no wallet has this id.
    pub fn wallet(&self, id: WalletId) -> Result<&Wallet, LedgerError> {
        self.wallets
            .find_by_id(id)
            .ok_or_else(|| LedgerError::wallet_not_found(id))
    }

    /// Look up a wallet for mutation
    ///
    /// # Errors
    ///
    /// Returns `WalletNotFound` if no wallet has this id.
    pub fn wallet_mut(&mut self, id: WalletId) -> Result<&mut Wallet, LedgerError> {
        self.wallets
            .find_by_id_mut(id)
            .ok_or_else(|| LedgerError::wallet_not_found(id))
    }

    /// First wallet with this name, in storage order
    pub fn wallet_by_name(&self, name: &str) -> Option<&Wallet> {
        self.wallets.wallets().into_iter().find(|w| w.name() == name)
    }

    pub fn wallets(&self) -> Vec<&Wallet> {
        self.wallets.wallets()
    }

    /// Insert or replace a wallet, returning the version it replaced
    pub fn upsert_wallet(&mut self, wallet: Wallet) -> Result<Option<Wallet>, LedgerError> {
        self.wallets.upsert(wallet)
    }

    pub fn remove_wallet(&mut self, id: WalletId) -> Result<Wallet, LedgerError> {
        self.wallets.remove(id)
    }

    /// Look up a category
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if no category has this id.
    pub fn category(&self, id: CategoryId) -> Result<&Category, LedgerError> {
        self.categories
            .find_by_id(id)
            .ok_or_else(|| LedgerError::category_not_found(id))
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.find_by_name(name)
    }

    pub fn categories(&self) -> Vec<&Category> {
        self.categories.categories()
    }

    /// Store a category
    ///
    /// # Errors
    ///
    /// - `CategoryNotFound` if the category names a parent that does not exist
    /// - `DuplicateCategory` if another category already uses the name
    pub fn save_category(&mut self, category: Category) -> Result<(), LedgerError> {
        if let Some(parent) = category.parent() {
            self.category(parent)?;
        }
        self.categories.save(category)
    }

    /// Delete a category nothing refers to
    ///
    /// # Errors
    ///
    /// - `CategoryNotFound` if the category does not exist
    /// - `LinkedToOtherObject` while wallet transactions or sub-categories reference it
    pub fn delete_category(&mut self, id: CategoryId) -> Result<Category, LedgerError> {
        let category = self.category(id)?;
        let references = self.category_references(id);
        if references > 0 {
            return Err(LedgerError::linked_to_other_object(
                category.name(),
                references,
            ));
        }
        self.categories.delete(id)
    }

    /// Number of wallet transactions filed under `id`
    pub fn category_references(&self, id: CategoryId) -> usize {
        self.wallets
            .wallets()
            .into_iter()
            .flat_map(Wallet::transactions)
            .filter(|t| t.category() == Some(id))
            .count()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
