//! Deposit and withdrawal commands
//!
//! Transfer-kind transactions are refused at construction; they go through
//! [`TransferCommand`](crate::command::TransferCommand).

use crate::command::Command;
use crate::core::Ledger;
use crate::types::{LedgerError, Transaction, TransactionId, TransactionKind, WalletId};
use chrono::{DateTime, Utc};

/// Unwrap a command payload and make sure it is a deposit or withdrawal
fn plain_payload(
    transaction: Option<Transaction>,
    operation: &str,
) -> Result<Transaction, LedgerError> {
    let transaction = transaction.ok_or_else(|| LedgerError::transaction_null(operation))?;
    match transaction.kind() {
        TransactionKind::Deposit | TransactionKind::Withdraw => Ok(transaction),
        kind => Err(LedgerError::invalid_transaction_type(Some(kind), operation)),
    }
}

/// Record a deposit or withdrawal in a wallet
#[derive(Debug)]
pub struct AddTransactionCommand {
    wallet_id: WalletId,
    transaction: Transaction,
}

impl AddTransactionCommand {
    /// Create the command
    ///
    /// # Errors
    ///
    /// - `TransactionNull` if no transaction is given
    /// - `InvalidTransactionType` for a transfer-kind transaction
    pub fn new(wallet_id: WalletId, transaction: Option<Transaction>) -> Result<Self, LedgerError> {
        Ok(AddTransactionCommand {
            wallet_id,
            transaction: plain_payload(transaction, "add transaction")?,
        })
    }

    pub fn transaction_id(&self) -> TransactionId {
        self.transaction.id()
    }
}

impl Command for AddTransactionCommand {
    fn name(&self) -> &'static str {
        "add-transaction"
    }

    fn execute(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        if let Some(category) = self.transaction.category() {
            ledger.category(category)?;
        }
        ledger
            .wallet_mut(self.wallet_id)?
            .add_transaction(self.transaction.clone())
    }

    fn undo(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        let wallet = ledger.wallet_mut(self.wallet_id)?;
        let id = self.transaction.id();
        match self.transaction.kind() {
            TransactionKind::Deposit => wallet.rollback_deposit(id)?,
            _ => wallet.rollback_withdraw(id)?,
        };
        Ok(())
    }
}

/// Remove a deposit or withdrawal from a wallet, subject to the wallet's rules
#[derive(Debug)]
pub struct RemoveTransactionCommand {
    wallet_id: WalletId,
    transaction: Transaction,
}

impl RemoveTransactionCommand {
    /// Create the command
    ///
    /// # Errors
    ///
    /// - `TransactionNull` if no transaction is given
    /// - `InvalidTransactionType` for a transfer leg
    pub fn new(wallet_id: WalletId, transaction: Option<Transaction>) -> Result<Self, LedgerError> {
        Ok(RemoveTransactionCommand {
            wallet_id,
            transaction: plain_payload(transaction, "remove transaction")?,
        })
    }
}

impl Command for RemoveTransactionCommand {
    fn name(&self) -> &'static str {
        "remove-transaction"
    }

    fn execute(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        // keep the stored copy, it may carry an amended date or note
        self.transaction = ledger
            .wallet_mut(self.wallet_id)?
            .remove_transaction(self.transaction.id())?;
        Ok(())
    }

    fn undo(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        ledger
            .wallet_mut(self.wallet_id)?
            .add_transaction(self.transaction.clone())
    }
}

/// Correct the date and note of a recorded transaction
#[derive(Debug)]
pub struct AmendTransactionCommand {
    wallet_id: WalletId,
    transaction_id: TransactionId,
    date: Option<DateTime<Utc>>,
    note: Option<String>,
    previous: Option<(DateTime<Utc>, Option<String>)>,
}

impl AmendTransactionCommand {
    /// Replace the note; `None` clears it. The date is kept unless set with
    /// [`with_date`](Self::with_date).
    pub fn new(wallet_id: WalletId, transaction_id: TransactionId, note: Option<String>) -> Self {
        AmendTransactionCommand {
            wallet_id,
            transaction_id,
            date: None,
            note,
            previous: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}

impl Command for AmendTransactionCommand {
    fn name(&self) -> &'static str {
        "amend-transaction"
    }

    fn execute(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        let wallet = ledger.wallet_mut(self.wallet_id)?;
        let date = match self.date {
            Some(date) => date,
            None => wallet
                .transaction(self.transaction_id)
                .map(Transaction::date)
                .ok_or_else(|| {
                    LedgerError::transaction_not_found(self.transaction_id, self.wallet_id)
                })?,
        };
        let previous = wallet.amend_transaction(self.transaction_id, date, self.note.clone())?;
        self.previous = Some(previous);
        Ok(())
    }

    fn undo(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        let (date, note) = self
            .previous
            .take()
            .ok_or_else(|| LedgerError::transaction_not_found(self.transaction_id, self.wallet_id))?;
        ledger
            .wallet_mut(self.wallet_id)?
            .amend_transaction(self.transaction_id, date, note)
            .map(drop)
    }
}
