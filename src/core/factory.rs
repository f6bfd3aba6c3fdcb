//! Wallet construction

use crate::core::wallet::Wallet;
use crate::rules::RuleTable;
use crate::types::{Money, WalletType};

/// Builds wallets with the rule set their type calls for
///
/// The policy lives in the [`RuleTable`] handed to the factory, not in the
/// construction logic, so alternative policies can be swapped in without touching
/// wallet code.
#[derive(Debug, Clone, Default)]
pub struct WalletFactory {
    table: RuleTable,
}

impl WalletFactory {
    pub fn new(table: RuleTable) -> Self {
        WalletFactory { table }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Create an empty wallet of `wallet_type` holding `initial_balance`
    pub fn create(
        &self,
        name: impl Into<String>,
        wallet_type: WalletType,
        initial_balance: Money,
    ) -> Wallet {
        Wallet::new(name, wallet_type, initial_balance, self.table.build(wallet_type))
    }
}
