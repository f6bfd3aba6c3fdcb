//! Rule configuration table
//!
//! Maps each wallet type to the ordered list of rules its wallets are created
//! with. The table is plain data, so it can be tested, printed, or loaded from a
//! file independently of wallet construction.

use crate::rules::{MaxWithdraw, NegativeBalanceNotAllowed, RuleSet, RuleStrategy};
use crate::types::{LedgerError, WalletType};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

/// Data description of one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleDescriptor {
    NegativeBalanceNotAllowed,
    MaxWithdraw { limit: Decimal },
}

impl RuleDescriptor {
    /// Parse a rule as written in a rule file
    ///
    /// # Errors
    ///
    /// Returns `InvalidRule` when the name is unknown, when `max-withdraw` has no
    /// limit or an unparseable one, or when the limit is negative.
    pub fn parse(rule: &str, limit: Option<&str>) -> Result<Self, LedgerError> {
        match rule.trim().to_lowercase().as_str() {
            "negative-balance-not-allowed" | "no-overdraft" => {
                Ok(RuleDescriptor::NegativeBalanceNotAllowed)
            }
            "max-withdraw" => {
                let limit = limit
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .ok_or_else(|| LedgerError::invalid_rule(rule, "a limit is required"))?;
                let limit = Decimal::from_str(limit).map_err(|_| {
                    LedgerError::invalid_rule(rule, format!("'{}' is not a number", limit))
                })?;
                if limit.is_sign_negative() {
                    return Err(LedgerError::invalid_rule(rule, "limit must not be negative"));
                }
                Ok(RuleDescriptor::MaxWithdraw { limit })
            }
            _ => Err(LedgerError::invalid_rule(rule, "unknown rule")),
        }
    }

    /// Instantiate the rule this descriptor stands for
    pub fn build(&self) -> Arc<dyn RuleStrategy> {
        match *self {
            RuleDescriptor::NegativeBalanceNotAllowed => Arc::new(NegativeBalanceNotAllowed),
            RuleDescriptor::MaxWithdraw { limit } => Arc::new(MaxWithdraw::new(limit)),
        }
    }
}

/// Wallet type → ordered rule descriptors
///
/// [`RuleTable::default`] holds the standard policy:
///
/// | wallet type | rules                                        |
/// |-------------|----------------------------------------------|
/// | checking    | no overdraft, max withdraw 5000.00           |
/// | debit-card  | no overdraft, max withdraw 1000.00           |
/// | credit-card | max withdraw 2000.00                         |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: HashMap<WalletType, Vec<RuleDescriptor>>,
}

impl RuleTable {
    /// A table that gives every wallet type no rules at all
    pub fn empty() -> Self {
        RuleTable {
            rules: HashMap::new(),
        }
    }

    /// Replace the rules for one wallet type
    pub fn with(mut self, wallet_type: WalletType, rules: Vec<RuleDescriptor>) -> Self {
        self.rules.insert(wallet_type, rules);
        self
    }

    /// Append one rule to a wallet type's list
    pub fn push(&mut self, wallet_type: WalletType, rule: RuleDescriptor) {
        self.rules.entry(wallet_type).or_default().push(rule);
    }

    pub fn rules_for(&self, wallet_type: WalletType) -> &[RuleDescriptor] {
        self.rules
            .get(&wallet_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Build the rule set a new wallet of `wallet_type` receives
    pub fn build(&self, wallet_type: WalletType) -> RuleSet {
        RuleSet::new(
            self.rules_for(wallet_type)
                .iter()
                .map(RuleDescriptor::build)
                .collect(),
        )
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::empty()
            .with(
                WalletType::Checking,
                vec![
                    RuleDescriptor::NegativeBalanceNotAllowed,
                    RuleDescriptor::MaxWithdraw {
                        limit: Decimal::new(500000, 2),
                    },
                ],
            )
            .with(
                WalletType::DebitCard,
                vec![
                    RuleDescriptor::NegativeBalanceNotAllowed,
                    RuleDescriptor::MaxWithdraw {
                        limit: Decimal::new(100000, 2),
                    },
                ],
            )
            .with(
                WalletType::CreditCard,
                vec![RuleDescriptor::MaxWithdraw {
                    limit: Decimal::new(200000, 2),
                }],
            )
    }
}
