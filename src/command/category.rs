//! Category commands

use crate::command::Command;
use crate::core::Ledger;
use crate::types::{Category, CategoryId, LedgerError};

/// Add a category to the ledger
#[derive(Debug)]
pub struct CreateCategoryCommand {
    category: Category,
}

impl CreateCategoryCommand {
    pub fn new(category: Category) -> Self {
        CreateCategoryCommand { category }
    }

    pub fn category_id(&self) -> CategoryId {
        self.category.id()
    }
}

impl Command for CreateCategoryCommand {
    fn name(&self) -> &'static str {
        "create-category"
    }

    fn execute(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        if ledger.category_by_name(self.category.name()).is_some() {
            return Err(LedgerError::duplicate_category(self.category.name()));
        }
        ledger.save_category(self.category.clone())
    }

    fn undo(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        ledger.delete_category(self.category.id()).map(drop)
    }
}

/// Delete a category that nothing refers to any more
#[derive(Debug)]
pub struct RemoveCategoryCommand {
    category_id: CategoryId,
    removed: Option<Category>,
}

impl RemoveCategoryCommand {
    pub fn new(category_id: CategoryId) -> Self {
        RemoveCategoryCommand {
            category_id,
            removed: None,
        }
    }
}

impl Command for RemoveCategoryCommand {
    fn name(&self) -> &'static str {
        "remove-category"
    }

    fn execute(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        self.removed = Some(ledger.delete_category(self.category_id)?);
        Ok(())
    }

    fn undo(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        let category = self
            .removed
            .take()
            .ok_or_else(|| LedgerError::category_not_found(self.category_id))?;
        ledger.save_category(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{AddTransactionCommand, CommandInvoker};
    use crate::types::{Money, Transaction, TransactionKind, WalletType};

    #[test]
    fn test_create_rejects_duplicate_name() {
        let mut ledger = Ledger::new();
        let mut invoker = CommandInvoker::new();
        invoker
            .execute(&mut ledger, CreateCategoryCommand::new(Category::new("Food")))
            .unwrap();

        let result = invoker.execute(
            &mut ledger,
            CreateCategoryCommand::new(Category::new("Food")),
        );

        assert_eq!(result, Err(LedgerError::duplicate_category("Food")));
        assert_eq!(ledger.categories().len(), 1);
        assert_eq!(invoker.undo_len(), 1);
    }

    #[test]
    fn test_create_and_undo() {
        let mut ledger = Ledger::new();
        let mut invoker = CommandInvoker::new();
        let command = CreateCategoryCommand::new(Category::new("Rent"));
        let id = command.category_id();

        invoker.execute(&mut ledger, command).unwrap();
        assert_eq!(ledger.category(id).unwrap().name(), "Rent");

        invoker.undo(&mut ledger).unwrap();
        assert!(ledger.category(id).is_err());
    }

    #[test]
    fn test_remove_referenced_category_fails() {
        let mut ledger = Ledger::new();
        let mut invoker = CommandInvoker::new();
        let food = Category::new("Food");
        let food_id = food.id();
        invoker
            .execute(&mut ledger, CreateCategoryCommand::new(food))
            .unwrap();
        let wallet = ledger.factory().create(
            "main",
            WalletType::Checking,
            Money::parse("100", "EUR").unwrap(),
        );
        let wallet_id = wallet.id();
        ledger.upsert_wallet(wallet).unwrap();
        let purchase = Transaction::builder()
            .amount(Money::parse("12.50", "EUR").unwrap())
            .kind(TransactionKind::Withdraw)
            .category(food_id)
            .build()
            .unwrap();
        invoker
            .execute(
                &mut ledger,
                AddTransactionCommand::new(wallet_id, Some(purchase)).unwrap(),
            )
            .unwrap();

        let result = invoker.execute(&mut ledger, RemoveCategoryCommand::new(food_id));

        assert_eq!(result, Err(LedgerError::linked_to_other_object("Food", 1)));
        assert!(ledger.category(food_id).is_ok());

        // once the purchase is undone the category can go
        invoker.undo(&mut ledger).unwrap();
        invoker
            .execute(&mut ledger, RemoveCategoryCommand::new(food_id))
            .unwrap();
        assert!(ledger.category(food_id).is_err());

        invoker.undo(&mut ledger).unwrap();
        assert_eq!(ledger.category(food_id).unwrap().name(), "Food");
    }

    #[test]
    fn test_remove_parent_with_children_fails() {
        let mut ledger = Ledger::new();
        let mut invoker = CommandInvoker::new();
        let food = Category::new("Food");
        let food_id = food.id();
        invoker
            .execute(&mut ledger, CreateCategoryCommand::new(food))
            .unwrap();
        invoker
            .execute(
                &mut ledger,
                CreateCategoryCommand::new(Category::new("Groceries").with_parent(food_id)),
            )
            .unwrap();

        let result = invoker.execute(&mut ledger, RemoveCategoryCommand::new(food_id));

        assert!(matches!(
            result,
            Err(LedgerError::LinkedToOtherObject { references: 1, .. })
        ));
    }
}
