//! Budget model
//!
//! A spending ceiling for one category over a recurring period.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::BudgetId;
use super::money::Money;
use super::period::BudgetPeriod;

/// A category budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    pub category: Category,

    /// Budgeted ceiling for the period
    pub amount: Money,

    /// Amount attributed to this budget.
    ///
    /// Stored for compatibility with existing data; reports replace it with
    /// the value derived from transactions (see `engine::budget::derived_spent`).
    #[serde(default)]
    pub spent: Money,

    #[serde(default)]
    pub period: BudgetPeriod,
}

impl Budget {
    /// Create a new budget with nothing spent
    pub fn new(category: Category, amount: Money, period: BudgetPeriod) -> Self {
        Self {
            id: BudgetId::new(),
            category,
            amount,
            spent: Money::zero(),
            period,
        }
    }

    /// Copy of this budget with a different spent amount
    pub fn with_spent(&self, spent: Money) -> Self {
        Self {
            spent,
            ..self.clone()
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_finite() || !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount);
        }

        if self.category.is_income() {
            return Err(BudgetValidationError::IncomeCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} of {}",
            self.category.label(),
            self.period,
            self.spent,
            self.amount
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount,
    IncomeCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Budget amount must be greater than zero"),
            Self::IncomeCategory => write!(f, "Budgets can only be set for expense categories"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
