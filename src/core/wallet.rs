//! Wallet aggregate
//!
//! This module provides the `Wallet` struct, the only component allowed to change
//! a balance. It does so exclusively by applying or reversing transactions.
//!
//! The Wallet is responsible for:
//! - Running its rule set before every checked mutation (fail-fast, no partial effect)
//! - Keeping the balance equal to the initial balance plus the net effect of the ledger
//! - Exposing its ledger read-only
//!
//! # Checked and unchecked paths
//!
//! `add_transaction`, `remove_transaction`, `transfer_withdraw` and `transfer_deposit`
//! are policy-checked. The `rollback_*` methods are not: they exist so that command
//! undo and transfer compensation can always restore a state that was reached by a
//! successful checked mutation.

use crate::core::report::Entity;
use crate::rules::{Flow, RuleSet};
use crate::types::{
    LedgerError, Money, Transaction, TransactionId, TransactionKind, WalletId, WalletType,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One transaction in a wallet's ledger, with the direction it moved the balance
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    transaction: Transaction,
    flow: Flow,
}

impl LedgerEntry {
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }
}

/// Wallet aggregate root
#[derive(Debug, Clone)]
pub struct Wallet {
    id: WalletId,
    name: String,
    wallet_type: WalletType,
    initial_balance: Money,
    balance: Money,
    rules: RuleSet,
    entries: Vec<LedgerEntry>,
}

impl Wallet {
    /// Create an empty wallet
    ///
    /// Wallets are normally built by [`WalletFactory`](crate::core::WalletFactory),
    /// which picks the rule set from the wallet type.
    pub(crate) fn new(
        name: impl Into<String>,
        wallet_type: WalletType,
        initial_balance: Money,
        rules: RuleSet,
    ) -> Self {
        Wallet {
            id: Uuid::new_v4(),
            name: name.into(),
            wallet_type,
            balance: initial_balance.clone(),
            initial_balance,
            rules,
            entries: Vec::new(),
        }
    }

    pub fn id(&self) -> WalletId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wallet_type(&self) -> WalletType {
        self.wallet_type
    }

    pub fn balance(&self) -> &Money {
        &self.balance
    }

    pub fn initial_balance(&self) -> &Money {
        &self.initial_balance
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Read-only view of the ledger, oldest entry first
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Transactions in ledger order
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().map(LedgerEntry::transaction)
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.entries
            .iter()
            .find(|entry| entry.transaction.id() == id)
            .map(LedgerEntry::transaction)
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.transaction(id).is_some()
    }

    /// Copy of this wallet under another name, keeping identity, balance and ledger
    pub fn renamed(&self, name: impl Into<String>) -> Wallet {
        Wallet {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Record a deposit or a withdrawal
    ///
    /// # Errors
    ///
    /// - `InvalidTransactionType` for transfers, which must use the transfer legs
    /// - `DuplicateTransaction` if the transaction is already in this ledger
    /// - any rule failure, e.g. `InsufficientFunds` or `AmountNotAllowed`
    /// - `CurrencyMismatch` if the transaction is in another currency
    ///
    /// On error the wallet is unchanged.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        let flow = match transaction.kind() {
            TransactionKind::Deposit => Flow::Inflow,
            TransactionKind::Withdraw => Flow::Outflow,
            TransactionKind::Transfer => {
                return Err(LedgerError::invalid_transaction_type(
                    Some(TransactionKind::Transfer),
                    "add_transaction",
                ))
            }
        };
        self.record(transaction, flow)
    }

    /// Remove a deposit or withdrawal, re-running the rule checks
    ///
    /// The rules see the reversing movement: removing a deposit is an outflow and can
    /// be refused by `NegativeBalanceNotAllowed`, removing a withdrawal is an inflow.
    ///
    /// # Errors
    ///
    /// - `TransactionNotFound` if the transaction is not in this ledger
    /// - `InvalidTransactionType` for transfer legs
    /// - any rule failure
    pub fn remove_transaction(&mut self, id: TransactionId) -> Result<Transaction, LedgerError> {
        let index = self.position(id)?;
        let entry = &self.entries[index];
        if entry.transaction.kind() == TransactionKind::Transfer {
            return Err(LedgerError::invalid_transaction_type(
                Some(TransactionKind::Transfer),
                "remove_transaction",
            ));
        }

        let reversing = entry.flow.reversed();
        self.rules.check_all(self, &entry.transaction, reversing)?;
        let balance = self.moved(entry.transaction.amount(), reversing)?;

        self.balance = balance;
        Ok(self.entries.remove(index).transaction)
    }

    /// Withdrawal leg of a transfer (rule-checked)
    pub fn transfer_withdraw(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        Self::require_kind(&transaction, TransactionKind::Transfer, "transfer_withdraw")?;
        self.record(transaction, Flow::Outflow)
    }

    /// Deposit leg of a transfer (rule-checked)
    pub fn transfer_deposit(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        Self::require_kind(&transaction, TransactionKind::Transfer, "transfer_deposit")?;
        self.record(transaction, Flow::Inflow)
    }

    /// Undo a withdrawal leg without rule checks
    pub fn rollback_transfer_withdraw(
        &mut self,
        id: TransactionId,
    ) -> Result<Transaction, LedgerError> {
        self.rollback(id, TransactionKind::Transfer, Flow::Outflow, "rollback_transfer_withdraw")
    }

    /// Undo a deposit leg without rule checks
    pub fn rollback_transfer_deposit(
        &mut self,
        id: TransactionId,
    ) -> Result<Transaction, LedgerError> {
        self.rollback(id, TransactionKind::Transfer, Flow::Inflow, "rollback_transfer_deposit")
    }

    /// Undo a deposit without rule checks
    pub fn rollback_deposit(&mut self, id: TransactionId) -> Result<Transaction, LedgerError> {
        self.rollback(id, TransactionKind::Deposit, Flow::Inflow, "rollback_deposit")
    }

    /// Undo a withdrawal without rule checks
    pub fn rollback_withdraw(&mut self, id: TransactionId) -> Result<Transaction, LedgerError> {
        self.rollback(id, TransactionKind::Withdraw, Flow::Outflow, "rollback_withdraw")
    }

    /// Correct the date and note of a recorded transaction
    ///
    /// The monetary effect is never touched. Returns the previous date and note.
    pub fn amend_transaction(
        &mut self,
        id: TransactionId,
        date: DateTime<Utc>,
        note: Option<String>,
    ) -> Result<(DateTime<Utc>, Option<String>), LedgerError> {
        let index = self.position(id)?;
        let transaction = &mut self.entries[index].transaction;
        let previous = (transaction.date(), transaction.note().map(str::to_string));

        transaction.set_date(date);
        transaction.set_note(note);

        Ok(previous)
    }

    /// Recompute the balance from the ledger and compare it with the held balance
    ///
    /// # Errors
    ///
    /// Returns `BalanceMismatch` if the two disagree.
    pub fn audit(&self) -> Result<(), LedgerError> {
        let mut expected = self.initial_balance.clone();
        for entry in &self.entries {
            expected = match entry.flow {
                Flow::Inflow => expected.add(entry.transaction.amount())?,
                Flow::Outflow => expected.subtract(entry.transaction.amount())?,
            };
        }

        if expected != self.balance {
            return Err(LedgerError::BalanceMismatch {
                wallet: self.id,
                expected,
                actual: self.balance.clone(),
            });
        }
        Ok(())
    }

    /// Visit this wallet, then every transaction in ledger order
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(Entity<'_>),
    {
        visit(Entity::Wallet(self));
        for transaction in self.transactions() {
            visit(Entity::Transaction(transaction));
        }
    }

    fn record(&mut self, transaction: Transaction, flow: Flow) -> Result<(), LedgerError> {
        if self.contains(transaction.id()) {
            return Err(LedgerError::duplicate_transaction(transaction.id(), self.id));
        }

        self.rules.check_all(self, &transaction, flow)?;
        let balance = self.moved(transaction.amount(), flow)?;

        self.balance = balance;
        self.entries.push(LedgerEntry { transaction, flow });
        Ok(())
    }

    fn rollback(
        &mut self,
        id: TransactionId,
        kind: TransactionKind,
        flow: Flow,
        operation: &str,
    ) -> Result<Transaction, LedgerError> {
        let index = self.position(id)?;
        let entry = &self.entries[index];
        if entry.transaction.kind() != kind || entry.flow != flow {
            return Err(LedgerError::invalid_transaction_type(
                Some(entry.transaction.kind()),
                operation,
            ));
        }

        let balance = self.moved(entry.transaction.amount(), flow.reversed())?;

        self.balance = balance;
        Ok(self.entries.remove(index).transaction)
    }

    /// Balance after moving `amount` in `flow`, without mutating anything
    fn moved(&self, amount: &Money, flow: Flow) -> Result<Money, LedgerError> {
        match flow {
            Flow::Inflow => self.balance.add(amount),
            Flow::Outflow => self.balance.subtract(amount),
        }
    }

    fn position(&self, id: TransactionId) -> Result<usize, LedgerError> {
        self.entries
            .iter()
            .position(|entry| entry.transaction.id() == id)
            .ok_or_else(|| LedgerError::transaction_not_found(id, self.id))
    }

    fn require_kind(
        transaction: &Transaction,
        kind: TransactionKind,
        operation: &str,
    ) -> Result<(), LedgerError> {
        if transaction.kind() != kind {
            return Err(LedgerError::invalid_transaction_type(
                Some(transaction.kind()),
                operation,
            ));
        }
        Ok(())
    }
}
