//! Wallet identifiers and wallet types

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Wallet identifier
pub type WalletId = Uuid;

/// Kind of wallet
///
/// The type decides which rules a wallet is created with; see
/// [`RuleTable`](crate::rules::RuleTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalletType {
    /// Current account: no overdraft, large withdrawal cap
    Checking,

    /// Debit card: no overdraft, small withdrawal cap
    DebitCard,

    /// Credit card: may go negative, withdrawal cap only
    CreditCard,
}

impl WalletType {
    /// Every wallet type, in display order
    pub const ALL: [WalletType; 3] = [
        WalletType::Checking,
        WalletType::DebitCard,
        WalletType::CreditCard,
    ];

    /// Parse the names used in scripts and rule files
    ///
    /// Accepts the kebab-case name (`debit-card`) and a short form (`debit`),
    /// case-insensitively.
    pub fn parse(name: &str) -> Option<WalletType> {
        match name.trim().to_lowercase().as_str() {
            "checking" => Some(WalletType::Checking),
            "debit-card" | "debit" => Some(WalletType::DebitCard),
            "credit-card" | "credit" => Some(WalletType::CreditCard),
            _ => None,
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WalletType::Checking => "checking",
            WalletType::DebitCard => "debit-card",
            WalletType::CreditCard => "credit-card",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("checking", Some(WalletType::Checking))]
    #[case("Debit-Card", Some(WalletType::DebitCard))]
    #[case("debit", Some(WalletType::DebitCard))]
    #[case(" credit ", Some(WalletType::CreditCard))]
    #[case("savings", None)]
    fn test_parse(#[case] input: &str, #[case] expected: Option<WalletType>) {
        assert_eq!(WalletType::parse(input), expected);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for wallet_type in WalletType::ALL {
            assert_eq!(WalletType::parse(&wallet_type.to_string()), Some(wallet_type));
        }
    }
}
