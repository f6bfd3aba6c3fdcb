//! Script session
//!
//! A session owns a ledger and its command history and turns typed script
//! operations into commands. Wallets and categories are addressed by name;
//! transactions by the label given in the script's `ref` column.

use crate::command::{
    AddTransactionCommand, AmendTransactionCommand, Command, CommandInvoker,
    CreateCategoryCommand, CreateWalletCommand, RemoveCategoryCommand, RemoveTransactionCommand,
    RemoveWalletCommand, SaveWalletCommand, TransferCommand,
};
use crate::core::{Ledger, Wallet};
use crate::io::ScriptOp;
use crate::types::{
    Category, CategoryId, LedgerError, Money, Transaction, TransactionId, TransactionKind,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Ledger, command history and transaction labels for one script run
#[derive(Debug)]
pub struct Session {
    ledger: Ledger,
    invoker: CommandInvoker,
    references: HashMap<String, TransactionId>,
}

impl Session {
    pub fn new(ledger: Ledger) -> Self {
        Session {
            ledger,
            invoker: CommandInvoker::new(),
            references: HashMap::new(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn invoker(&self) -> &CommandInvoker {
        &self.invoker
    }

    /// Apply one script operation
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to apply
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the operation succeeded; `undo` and `redo` with an empty history
    ///   also succeed, as no-ops
    /// * `Err(LedgerError)` if a name could not be resolved, the transaction could not
    ///   be built, or the command failed. The ledger and history are unchanged.
    pub fn apply(&mut self, op: ScriptOp) -> Result<(), LedgerError> {
        match op {
            ScriptOp::Open {
                wallet,
                wallet_type,
                initial_balance,
                currency,
            } => {
                let balance = Money::of(initial_balance, &currency)?;
                let command =
                    CreateWalletCommand::new(self.ledger.factory(), wallet, wallet_type, balance);
                self.run(command)
            }
            ScriptOp::Save { wallet, rename } => {
                let renamed = self.wallet(&wallet)?.renamed(rename);
                self.run(SaveWalletCommand::new(renamed))
            }
            ScriptOp::Close { wallet } => {
                let id = self.wallet(&wallet)?.id();
                self.run(RemoveWalletCommand::new(id))
            }
            ScriptOp::Record {
                wallet,
                kind,
                amount,
                currency,
                category,
                note,
                reference,
            } => {
                let wallet = self.wallet(&wallet)?;
                let wallet_id = wallet.id();
                let amount = Self::money(wallet, amount, currency.as_deref())?;
                let category = category
                    .map(|name| self.category_id(&name))
                    .transpose()?;
                let transaction = Transaction::builder()
                    .amount(amount)
                    .kind(kind)
                    .maybe_category(category)
                    .maybe_note(note)
                    .build()?;
                let id = transaction.id();

                self.run(AddTransactionCommand::new(wallet_id, Some(transaction))?)?;
                self.remember(reference, id);
                Ok(())
            }
            ScriptOp::Transfer {
                from,
                to,
                amount,
                currency,
                note,
                reference,
            } => {
                let source = self.wallet(&from)?;
                let from_id = source.id();
                let amount = Self::money(source, amount, currency.as_deref())?;
                let to_id = self.wallet(&to)?.id();
                let transaction = Transaction::builder()
                    .amount(amount)
                    .kind(TransactionKind::Transfer)
                    .maybe_note(note)
                    .build()?;
                let id = transaction.id();

                self.run(TransferCommand::new(from_id, to_id, Some(transaction))?)?;
                self.remember(reference, id);
                Ok(())
            }
            ScriptOp::Remove { wallet, reference } => {
                let tx_id = self.reference(&reference)?;
                let wallet = self.wallet(&wallet)?;
                let wallet_id = wallet.id();
                let transaction = wallet.transaction(tx_id).cloned();
                self.run(RemoveTransactionCommand::new(wallet_id, transaction)?)
            }
            ScriptOp::Note {
                wallet,
                reference,
                note,
            } => {
                let tx_id = self.reference(&reference)?;
                let wallet_id = self.wallet(&wallet)?.id();
                self.run(AmendTransactionCommand::new(wallet_id, tx_id, note))
            }
            ScriptOp::Category { name, parent } => {
                let mut category = Category::new(name);
                if let Some(parent) = parent {
                    category = category.with_parent(self.category_id(&parent)?);
                }
                self.run(CreateCategoryCommand::new(category))
            }
            ScriptOp::DropCategory { name } => {
                let id = self.category_id(&name)?;
                self.run(RemoveCategoryCommand::new(id))
            }
            ScriptOp::Undo => {
                if !self.invoker.undo(&mut self.ledger)? {
                    tracing::debug!("nothing to undo");
                }
                Ok(())
            }
            ScriptOp::Redo => {
                if !self.invoker.redo(&mut self.ledger)? {
                    tracing::debug!("nothing to redo");
                }
                Ok(())
            }
        }
    }

    /// Hand the ledger over, dropping the history
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    fn run<C>(&mut self, command: C) -> Result<(), LedgerError>
    where
        C: Command + 'static,
    {
        self.invoker.execute(&mut self.ledger, command)
    }

    fn wallet(&self, name: &str) -> Result<&Wallet, LedgerError> {
        self.ledger
            .wallet_by_name(name)
            .ok_or_else(|| LedgerError::wallet_not_found(name))
    }

    fn category_id(&self, name: &str) -> Result<CategoryId, LedgerError> {
        self.ledger
            .category_by_name(name)
            .map(Category::id)
            .ok_or_else(|| LedgerError::category_not_found(name))
    }

    fn reference(&self, label: &str) -> Result<TransactionId, LedgerError> {
        self.references
            .get(label)
            .copied()
            .ok_or_else(|| LedgerError::parse_error(format!("unknown ref '{}'", label)))
    }

    fn remember(&mut self, label: Option<String>, id: TransactionId) {
        if let Some(label) = label {
            self.references.insert(label, id);
        }
    }

    /// Amount in the given currency, or in the wallet's own currency if none is given
    fn money(wallet: &Wallet, amount: Decimal, currency: Option<&str>) -> Result<Money, LedgerError> {
        let currency = currency.unwrap_or_else(|| wallet.balance().currency().code());
        Money::of(amount, currency)
    }
}
