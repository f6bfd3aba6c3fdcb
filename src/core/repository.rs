//! In-memory repositories
//!
//! Both repositories keep insertion order, which gives reports and CSV output a
//! stable order without sorting.

use crate::core::traits::{CategoryRepository, WalletRepository};
use crate::core::wallet::Wallet;
use crate::types::{Category, CategoryId, LedgerError, WalletId};

/// Wallet storage backed by a `Vec`
#[derive(Debug, Default)]
pub struct InMemoryWalletRepository {
    wallets: Vec<Wallet>,
}

impl InMemoryWalletRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WalletRepository for InMemoryWalletRepository {
    fn upsert(&mut self, wallet: Wallet) -> Result<Option<Wallet>, LedgerError> {
        match self.wallets.iter_mut().find(|w| w.id() == wallet.id()) {
            Some(existing) => Ok(Some(std::mem::replace(existing, wallet))),
            None => {
                self.wallets.push(wallet);
                Ok(None)
            }
        }
    }

    fn find_by_id(&self, id: WalletId) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.id() == id)
    }

    fn find_by_id_mut(&mut self, id: WalletId) -> Option<&mut Wallet> {
        self.wallets.iter_mut().find(|w| w.id() == id)
    }

    fn remove(&mut self, id: WalletId) -> Result<Wallet, LedgerError> {
        let index = self
            .wallets
            .iter()
            .position(|w| w.id() == id)
            .ok_or_else(|| LedgerError::wallet_not_found(id))?;
        Ok(self.wallets.remove(index))
    }

    fn wallets(&self) -> Vec<&Wallet> {
        self.wallets.iter().collect()
    }
}

/// Category storage backed by a `Vec`
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: Vec<Category>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn save(&mut self, category: Category) -> Result<(), LedgerError> {
        if self
            .categories
            .iter()
            .any(|c| c.id() != category.id() && c.name() == category.name())
        {
            return Err(LedgerError::duplicate_category(category.name()));
        }

        match self.categories.iter_mut().find(|c| c.id() == category.id()) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
        Ok(())
    }

    fn find_by_id(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    fn find_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    fn delete(&mut self, id: CategoryId) -> Result<Category, LedgerError> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| LedgerError::category_not_found(id))?;

        let children = self
            .categories
            .iter()
            .filter(|c| c.parent() == Some(id))
            .count();
        if children > 0 {
            return Err(LedgerError::linked_to_other_object(
                self.categories[index].name(),
                children,
            ));
        }

        Ok(self.categories.remove(index))
    }

    fn categories(&self) -> Vec<&Category> {
        self.categories.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WalletFactory;
    use crate::types::{Money, WalletType};

    fn wallet(name: &str) -> Wallet {
        WalletFactory::default().create(
            name,
            WalletType::Checking,
            Money::parse("10", "EUR").unwrap(),
        )
    }

    #[test]
    fn test_wallet_upsert_inserts_then_replaces() {
        let mut repo = InMemoryWalletRepository::new();
        let original = wallet("main");
        let id = original.id();

        assert!(repo.upsert(original.clone()).unwrap().is_none());
        let replaced = repo.upsert(original.renamed("renamed")).unwrap();

        assert_eq!(replaced.map(|w| w.name().to_string()), Some("main".to_string()));
        assert_eq!(repo.find_by_id(id).map(Wallet::name), Some("renamed"));
        assert_eq!(repo.wallets().len(), 1);
    }

    #[test]
    fn test_wallet_remove() {
        let mut repo = InMemoryWalletRepository::new();
        let w = wallet("main");
        let id = w.id();
        repo.upsert(w).unwrap();

        assert_eq!(repo.remove(id).unwrap().id(), id);
        assert!(repo.find_by_id(id).is_none());
        assert!(matches!(
            repo.remove(id),
            Err(LedgerError::WalletNotFound { .. })
        ));
    }

    #[test]
    fn test_wallets_keep_insertion_order() {
        let mut repo = InMemoryWalletRepository::new();
        for name in ["zeta", "alpha", "mid"] {
            repo.upsert(wallet(name)).unwrap();
        }

        let names: Vec<&str> = repo.wallets().into_iter().map(Wallet::name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_category_lookup_and_duplicate_names() {
        let mut repo = InMemoryCategoryRepository::new();
        let food = Category::new("Food");
        let id = food.id();
        repo.save(food.clone()).unwrap();

        assert_eq!(repo.find_by_id(id), Some(&food));
        assert_eq!(repo.find_by_name("Food"), Some(&food));
        assert!(repo.find_by_name("food").is_none());

        // saving the same category again is an update
        repo.save(food).unwrap();
        assert_eq!(
            repo.save(Category::new("Food")),
            Err(LedgerError::duplicate_category("Food"))
        );
    }

    #[test]
    fn test_category_delete_blocked_by_children() {
        let mut repo = InMemoryCategoryRepository::new();
        let food = Category::new("Food");
        let groceries = Category::new("Groceries").with_parent(food.id());
        let (food_id, groceries_id) = (food.id(), groceries.id());
        repo.save(food).unwrap();
        repo.save(groceries).unwrap();

        assert_eq!(
            repo.delete(food_id),
            Err(LedgerError::linked_to_other_object("Food", 1))
        );

        repo.delete(groceries_id).unwrap();
        assert_eq!(repo.delete(food_id).unwrap().name(), "Food");
        assert!(matches!(
            repo.delete(food_id),
            Err(LedgerError::CategoryNotFound { .. })
        ));
    }
}
