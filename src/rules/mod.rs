//! Wallet policy rules
//!
//! A rule is a predicate that may veto a wallet mutation before it is applied.
//! Wallets hold an ordered [`RuleSet`] that is fixed when the wallet is created;
//! rules run in order and the first failure aborts the whole operation.
//!
//! Rules see the movement's [`Flow`] rather than only the transaction kind, so the
//! deposit leg of a transfer is treated as money coming in and the withdrawal leg
//! as money going out.

pub mod max_withdraw;
pub mod negative_balance;
pub mod table;

pub use max_withdraw::MaxWithdraw;
pub use negative_balance::NegativeBalanceNotAllowed;
pub use table::{RuleDescriptor, RuleTable};

use crate::core::wallet::Wallet;
use crate::types::{LedgerError, Transaction};
use std::fmt;
use std::sync::Arc;

/// Direction of a movement relative to a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Balance increases
    Inflow,
    /// Balance decreases
    Outflow,
}

impl Flow {
    /// The flow that undoes this one
    pub fn reversed(self) -> Flow {
        match self {
            Flow::Inflow => Flow::Outflow,
            Flow::Outflow => Flow::Inflow,
        }
    }
}

/// Policy evaluated before a wallet applies a movement
pub trait RuleStrategy: fmt::Debug + Send + Sync {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Check whether `transaction`, moving in `flow`, may be applied to `wallet`
    ///
    /// # Errors
    ///
    /// Returns the domain error describing the violated policy.
    fn check(&self, wallet: &Wallet, transaction: &Transaction, flow: Flow)
        -> Result<(), LedgerError>;
}

/// Ordered, immutable collection of rules attached to one wallet
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn RuleStrategy>>,
}

impl RuleSet {
    pub fn new(rules: Vec<Arc<dyn RuleStrategy>>) -> Self {
        RuleSet { rules }
    }

    /// Run every rule in order, stopping at the first failure
    pub fn check_all(
        &self,
        wallet: &Wallet,
        transaction: &Transaction,
        flow: Flow,
    ) -> Result<(), LedgerError> {
        for rule in &self.rules {
            if let Err(error) = rule.check(wallet, transaction, flow) {
                tracing::debug!(
                    rule = rule.name(),
                    wallet = %wallet.id(),
                    tx = %transaction.id(),
                    "rule rejected movement"
                );
                return Err(error);
            }
        }
        Ok(())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
