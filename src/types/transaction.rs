//! Transaction-related types for the wallet ledger
//!
//! This module defines the transaction kinds, the immutable transaction record,
//! and the builder that is the only way to create one.

use crate::types::category::CategoryId;
use crate::types::error::LedgerError;
use crate::types::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Transaction identifier
pub type TransactionId = Uuid;

/// Kinds of monetary movement a wallet understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming into a wallet
    Deposit,

    /// Money leaving a wallet
    Withdraw,

    /// One movement recorded as two legs, a withdrawal from the source wallet
    /// and a deposit into the destination wallet
    ///
    /// Transfers never go through a plain add or remove.
    Transfer,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
            TransactionKind::Transfer => "transfer",
        };
        f.write_str(name)
    }
}

/// Immutable record of one monetary movement
///
/// Only the `date` and the `note` can be corrected after construction.
/// Two transactions are equal when they share the same identifier.
#[derive(Debug, Clone)]
pub struct Transaction {
    id: TransactionId,
    amount: Money,
    kind: TransactionKind,
    category: Option<CategoryId>,
    date: DateTime<Utc>,
    note: Option<String>,
}

impl Transaction {
    pub fn builder() -> TransactionBuilder {
        TransactionBuilder::default()
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.date = date;
    }

    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

/// Validating builder for [`Transaction`]
///
/// # Examples
///
/// ```
/// use rust_wallet_ledger::types::{Money, Transaction, TransactionKind};
/// use rust_decimal::Decimal;
///
/// let tx = Transaction::builder()
///     .amount(Money::of(Decimal::new(2500, 2), "EUR").unwrap())
///     .kind(TransactionKind::Deposit)
///     .note("refund")
///     .build()
///     .unwrap();
/// assert_eq!(tx.note(), Some("refund"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    amount: Option<Money>,
    kind: Option<TransactionKind>,
    category: Option<CategoryId>,
    date: Option<DateTime<Utc>>,
    note: Option<String>,
}

impl TransactionBuilder {
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    pub fn maybe_category(mut self, category: Option<CategoryId>) -> Self {
        self.category = category;
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn maybe_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Validate the collected fields and produce the transaction
    ///
    /// The date defaults to the current time when none was given.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if no amount was given or the amount is not positive
    /// - `InvalidTransactionType` if no kind was given
    pub fn build(self) -> Result<Transaction, LedgerError> {
        let amount = self
            .amount
            .ok_or_else(|| LedgerError::invalid_amount("amount is required to build a transaction"))?;
        if !amount.is_positive() {
            return Err(LedgerError::invalid_amount(format!(
                "transaction amount must be positive, got {}",
                amount
            )));
        }
        let kind = self
            .kind
            .ok_or_else(|| LedgerError::invalid_transaction_type(None, "build"))?;

        Ok(Transaction {
            id: Uuid::new_v4(),
            amount,
            kind,
            category: self.category,
            date: self.date.unwrap_or_else(Utc::now),
            note: self.note,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn eur(amount: rust_decimal::Decimal) -> Money {
        Money::of(amount, "EUR").unwrap()
    }

    #[test]
    fn test_build_with_all_fields() {
        let category = Uuid::new_v4();
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let tx = Transaction::builder()
            .amount(eur(dec!(12.345)))
            .kind(TransactionKind::Withdraw)
            .category(category)
            .date(date)
            .note("lunch")
            .build()
            .unwrap();

        assert_eq!(tx.amount(), &eur(dec!(12.34)));
        assert_eq!(tx.kind(), TransactionKind::Withdraw);
        assert_eq!(tx.category(), Some(category));
        assert_eq!(tx.date(), date);
        assert_eq!(tx.note(), Some("lunch"));
    }

    #[test]
    fn test_build_without_amount_fails() {
        let result = Transaction::builder().kind(TransactionKind::Deposit).build();
        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
    }

    #[test]
    fn test_build_without_kind_fails() {
        let result = Transaction::builder().amount(eur(dec!(1))).build();
        assert_eq!(
            result.unwrap_err(),
            LedgerError::invalid_transaction_type(None, "build")
        );
    }

    #[test]
    fn test_build_rejects_non_positive_amounts() {
        for amount in [dec!(0), dec!(-5), dec!(0.004)] {
            let result = Transaction::builder()
                .amount(eur(amount))
                .kind(TransactionKind::Deposit)
                .build();
            assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        }
    }

    #[test]
    fn test_identity_equality() {
        let builder = Transaction::builder()
            .amount(eur(dec!(5)))
            .kind(TransactionKind::Deposit);
        let first = builder.clone().build().unwrap();
        let second = builder.build().unwrap();

        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }

    #[test]
    fn test_date_and_note_can_be_corrected() {
        let mut tx = Transaction::builder()
            .amount(eur(dec!(5)))
            .kind(TransactionKind::Deposit)
            .build()
            .unwrap();
        let date = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();

        tx.set_date(date);
        tx.set_note(Some("corrected".to_string()));

        assert_eq!(tx.date(), date);
        assert_eq!(tx.note(), Some("corrected"));
    }
}
