//! Rule forbidding overdrafts

use crate::core::wallet::Wallet;
use crate::rules::{Flow, RuleStrategy};
use crate::types::{LedgerError, Transaction};
use std::cmp::Ordering;

/// Rejects outflows larger than the current balance
///
/// Inflows always pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NegativeBalanceNotAllowed;

impl RuleStrategy for NegativeBalanceNotAllowed {
    fn name(&self) -> &'static str {
        "negative-balance-not-allowed"
    }

    fn check(
        &self,
        wallet: &Wallet,
        transaction: &Transaction,
        flow: Flow,
    ) -> Result<(), LedgerError> {
        if flow == Flow::Inflow {
            return Ok(());
        }
        if wallet.balance().try_cmp(transaction.amount())? == Ordering::Less {
            return Err(LedgerError::insufficient_funds(
                wallet.id(),
                wallet.balance().clone(),
                transaction.amount().clone(),
            ));
        }
        Ok(())
    }
}
