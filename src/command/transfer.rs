//! Transfers between wallets
//!
//! A transfer is two legs recorded under the same transaction: a withdrawal leg on
//! the source and a deposit leg on the destination. Both legs are rule-checked. If
//! the deposit leg fails after the withdrawal leg went through, the withdrawal is
//! rolled back before the error is returned, so a failed transfer never leaves one
//! side applied.

use crate::command::Command;
use crate::core::Ledger;
use crate::types::{LedgerError, Transaction, TransactionId, TransactionKind, WalletId};

/// Move money from one wallet to another
#[derive(Debug)]
pub struct TransferCommand {
    from: WalletId,
    to: WalletId,
    transaction: Transaction,
}

impl TransferCommand {
    /// Create the command
    ///
    /// # Arguments
    ///
    /// * `from` - Wallet the money leaves
    /// * `to` - Wallet the money arrives in
    /// * `transaction` - Transfer-kind transaction carrying the amount
    ///
    /// # Errors
    ///
    /// - `TransactionNull` if no transaction is given
    /// - `InvalidTransactionType` unless the transaction is a transfer
    /// - `SameWallet` if source and destination are the same wallet
    pub fn new(
        from: WalletId,
        to: WalletId,
        transaction: Option<Transaction>,
    ) -> Result<Self, LedgerError> {
        let transaction = transaction.ok_or_else(|| LedgerError::transaction_null("transfer"))?;
        if transaction.kind() != TransactionKind::Transfer {
            return Err(LedgerError::invalid_transaction_type(
                Some(transaction.kind()),
                "transfer",
            ));
        }
        if from == to {
            return Err(LedgerError::SameWallet { wallet: from });
        }

        Ok(TransferCommand {
            from,
            to,
            transaction,
        })
    }

    pub fn transaction_id(&self) -> TransactionId {
        self.transaction.id()
    }
}

impl Command for TransferCommand {
    fn name(&self) -> &'static str {
        "transfer"
    }

    fn execute(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        ledger
            .wallet_mut(self.from)?
            .transfer_withdraw(self.transaction.clone())?;

        let deposited = ledger
            .wallet_mut(self.to)
            .and_then(|wallet| wallet.transfer_deposit(self.transaction.clone()));

        if let Err(cause) = deposited {
            tracing::warn!(
                from = %self.from,
                to = %self.to,
                amount = %self.transaction.amount(),
                error = %cause,
                "deposit leg failed, rolling back withdrawal"
            );
            ledger
                .wallet_mut(self.from)?
                .rollback_transfer_withdraw(self.transaction.id())?;
            return Err(LedgerError::transfer_failed(self.from, self.to, cause));
        }

        tracing::info!(
            from = %self.from,
            to = %self.to,
            amount = %self.transaction.amount(),
            "transfer completed"
        );
        Ok(())
    }

    fn undo(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        let id = self.transaction.id();
        ledger.wallet_mut(self.to)?.rollback_transfer_deposit(id)?;
        ledger.wallet_mut(self.from)?.rollback_transfer_withdraw(id)?;
        Ok(())
    }
}
