//! Transaction model
//!
//! An income or expense record. Transactions are immutable values: edits
//! replace the whole record keyed by id.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Non-negative amount; direction comes from `is_expense`
    pub amount: Money,

    /// What the money was for
    pub description: String,

    pub category: Category,

    /// When the transaction happened
    pub date: DateTime<Utc>,

    /// True for outflows, false for income
    pub is_expense: bool,
}

impl Transaction {
    /// Create a new expense
    pub fn expense(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into(),
            category,
            date,
            is_expense: true,
        }
    }

    /// Create a new income record
    pub fn income(description: impl Into<String>, amount: Money, date: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into(),
            category: Category::Income,
            date,
            is_expense: false,
        }
    }

    /// Calendar date (UTC) of the transaction
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Amount with sign applied: negative for expenses
    pub fn signed_amount(&self) -> Money {
        if self.is_expense {
            -self.amount
        } else {
            self.amount
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if !self.amount.is_finite() || self.amount.is_negative() {
            return Err(TransactionValidationError::InvalidAmount(self.amount.value()));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    EmptyDescription,
    InvalidAmount(f64),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Transaction description cannot be empty"),
            Self::InvalidAmount(v) => {
                write!(f, "Transaction amount must be a non-negative number, got {}", v)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn when() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_constructors() {
        let salary = Transaction::income("Salário", Money::new(250000.0), when());
        assert!(!salary.is_expense);
        assert_eq!(salary.category, Category::Income);

        let groceries =
            Transaction::expense("Mercado", Money::new(40000.0), Category::Food, when());
        assert!(groceries.is_expense);
        assert_eq!(groceries.signed_amount().value(), -40000.0);
    }

    #[test]
    fn test_validation() {
        let mut txn = Transaction::expense("Taxi", Money::new(1500.0), Category::Transportation, when());
        assert!(txn.validate().is_ok());

        txn.description = "   ".into();
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyDescription));

        txn.description = "Taxi".into();
        txn.amount = Money::new(-1.0);
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::expense("Renda", Money::new(90000.0), Category::Housing, when());
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }
}
