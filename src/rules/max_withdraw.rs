//! Rule capping the size of a single outflow

use crate::core::wallet::Wallet;
use crate::rules::{Flow, RuleStrategy};
use crate::types::{LedgerError, Transaction};
use rust_decimal::Decimal;

/// Rejects outflows strictly larger than `limit`
///
/// The limit is currency-agnostic: it is compared against the amount of the
/// movement in whatever currency the wallet uses. Inflows always pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxWithdraw {
    limit: Decimal,
}

impl MaxWithdraw {
    pub fn new(limit: Decimal) -> Self {
        MaxWithdraw { limit }
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }
}

impl RuleStrategy for MaxWithdraw {
    fn name(&self) -> &'static str {
        "max-withdraw"
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
        if transaction.amount().amount() > self.limit {
            return Err(LedgerError::amount_not_allowed(
                wallet.id(),
                self.limit,
                transaction.amount().clone(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;
    use crate::types::{Money, TransactionKind, WalletType};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn transaction(amount: Decimal, kind: TransactionKind) -> Transaction {
        Transaction::builder()
            .amount(Money::of(amount, "EUR").unwrap())
            .kind(kind)
            .build()
            .unwrap()
    }

    fn wallet() -> Wallet {
        Wallet::new(
            "capped",
            WalletType::DebitCard,
            Money::of(dec!(2000), "EUR").unwrap(),
            RuleSet::default(),
        )
    }

    #[rstest]
    #[case::at_limit(dec!(1000.00), true)]
    #[case::under_limit(dec!(999.99), true)]
    #[case::over_limit(dec!(1000.01), false)]
    #[case::far_over_limit(dec!(1500.00), false)]
    fn test_outflow(#[case] amount: Decimal, #[case] allowed: bool) {
        let rule = MaxWithdraw::new(dec!(1000));
        let tx = transaction(amount, TransactionKind::Withdraw);

        let result = rule.check(&wallet(), &tx, Flow::Outflow);

        if allowed {
            assert!(result.is_ok());
        } else {
            assert!(matches!(
                result,
                Err(LedgerError::AmountNotAllowed { limit, .. }) if limit == dec!(1000)
            ));
        }
    }

    #[test]
    fn test_inflow_always_passes() {
        let rule = MaxWithdraw::new(dec!(1));
        let tx = transaction(dec!(5000), TransactionKind::Deposit);

        assert!(rule.check(&wallet(), &tx, Flow::Inflow).is_ok());
    }
}
