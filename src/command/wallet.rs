//! Wallet lifecycle commands

use crate::command::Command;
use crate::core::{Ledger, Wallet, WalletFactory};
use crate::types::{LedgerError, Money, WalletId, WalletType};

/// Create a new wallet
///
/// The wallet is built when the command is constructed, so its id is known up
/// front and stays the same across redo.
#[derive(Debug)]
pub struct CreateWalletCommand {
    wallet: Wallet,
}

impl CreateWalletCommand {
    pub fn new(
        factory: &WalletFactory,
        name: impl Into<String>,
        wallet_type: WalletType,
        initial_balance: Money,
    ) -> Self {
        CreateWalletCommand {
            wallet: factory.create(name, wallet_type, initial_balance),
        }
    }

    pub fn wallet_id(&self) -> WalletId {
        self.wallet.id()
    }
}

impl Command for CreateWalletCommand {
    fn name(&self) -> &'static str {
        "create-wallet"
    }

    fn execute(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        ledger.upsert_wallet(self.wallet.clone())?;
        tracing::info!(wallet = %self.wallet.name(), id = %self.wallet.id(), "wallet created");
        Ok(())
    }

    fn undo(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        ledger.remove_wallet(self.wallet.id()).map(drop)
    }
}

/// Persist a wallet, inserting it or replacing the stored version
#[derive(Debug)]
pub struct SaveWalletCommand {
    wallet: Wallet,
    previous: Option<Wallet>,
}

impl SaveWalletCommand {
    pub fn new(wallet: Wallet) -> Self {
        SaveWalletCommand {
            wallet,
            previous: None,
        }
    }
}

impl Command for SaveWalletCommand {
    fn name(&self) -> &'static str {
        "save-wallet"
    }

    fn execute(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        self.previous = ledger.upsert_wallet(self.wallet.clone())?;
        Ok(())
    }

    fn undo(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        match self.previous.take() {
            Some(previous) => ledger.upsert_wallet(previous).map(drop),
            None => ledger.remove_wallet(self.wallet.id()).map(drop),
        }
    }
}

/// Remove a wallet together with its ledger
#[derive(Debug)]
pub struct RemoveWalletCommand {
    wallet_id: WalletId,
    removed: Option<Wallet>,
}

impl RemoveWalletCommand {
    pub fn new(wallet_id: WalletId) -> Self {
        RemoveWalletCommand {
            wallet_id,
            removed: None,
        }
    }
}

impl Command for RemoveWalletCommand {
    fn name(&self) -> &'static str {
        "remove-wallet"
    }

    fn execute(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        let wallet = ledger.remove_wallet(self.wallet_id)?;
        tracing::info!(wallet = %wallet.name(), balance = %wallet.balance(), "wallet removed");
        self.removed = Some(wallet);
        Ok(())
    }

    fn undo(&mut self, ledger: &mut Ledger) -> Result<(), LedgerError> {
        let wallet = self
            .removed
            .take()
            .ok_or_else(|| LedgerError::wallet_not_found(self.wallet_id))?;
        ledger.upsert_wallet(wallet).map(drop)
    }
}
