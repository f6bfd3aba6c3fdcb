//! Money value type
//!
//! Amounts are stored as [`Decimal`] at a fixed scale of two places, rounded with
//! banker's rounding (round-half-to-even) when the value is constructed. Every
//! arithmetic operation and every comparison is currency-checked.

use crate::types::error::LedgerError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of decimal places every amount is normalized to
pub const SCALE: u32 = 2;

/// ISO-style currency code
///
/// Codes are trimmed and upper-cased, so `"eur"` and `" EUR "` are the same currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(String);

impl Currency {
    /// Validate and normalize a currency code
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` if the code is blank or contains anything other
    /// than ASCII letters.
    pub fn new(code: &str) -> Result<Self, LedgerError> {
        let code = code.trim();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LedgerError::invalid_currency(code));
        }
        Ok(Currency(code.to_ascii_uppercase()))
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s)
    }
}

/// Immutable amount of money in a single currency
///
/// Equality compares the currency and the rounded amount. `PartialOrd` yields
/// `None` across currencies; use [`Money::try_cmp`] to get a `CurrencyMismatch`
/// error instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Build a normalized value from an already validated currency
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        let mut amount = amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven);
        amount.rescale(SCALE);
        Money { amount, currency }
    }

    /// Build a normalized value from a raw currency code
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` if the code is blank or malformed.
    pub fn of(amount: Decimal, currency: &str) -> Result<Self, LedgerError> {
        Ok(Money::new(amount, Currency::new(currency)?))
    }

    /// Parse an amount written as text, e.g. `"1500.00"`
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the text is blank or not a decimal number
    /// - `InvalidCurrency` if the currency code is blank or malformed
    pub fn parse(amount: &str, currency: &str) -> Result<Self, LedgerError> {
        let amount = amount.trim();
        if amount.is_empty() {
            return Err(LedgerError::invalid_amount("amount must not be empty"));
        }
        let value = Decimal::from_str(amount)
            .map_err(|_| LedgerError::invalid_amount(format!("'{}' is not a number", amount)))?;
        Money::of(value, currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Money::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Sum of two values in the same currency
    pub fn add(&self, other: &Money) -> Result<Money, LedgerError> {
        self.check_currency(other)?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("add"))?;
        Ok(Money::new(sum, self.currency.clone()))
    }

    /// Difference of two values in the same currency
    pub fn subtract(&self, other: &Money) -> Result<Money, LedgerError> {
        self.check_currency(other)?;
        let difference = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("subtract"))?;
        Ok(Money::new(difference, self.currency.clone()))
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Total order within a single currency
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` when the currencies differ.
    pub fn try_cmp(&self, other: &Money) -> Result<Ordering, LedgerError> {
        self.check_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    fn check_currency(&self, other: &Money) -> Result<(), LedgerError> {
        if self.currency != other.currency {
            return Err(LedgerError::currency_mismatch(
                self.currency.code(),
                other.currency.code(),
            ));
        }
        Ok(())
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.amount.cmp(&other.amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}
