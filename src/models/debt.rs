//! Debt model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DebtId;
use super::money::Money;

/// An outstanding debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,

    pub name: String,

    /// Outstanding principal
    pub amount: Money,

    /// Annual interest rate in percent (e.g. 18.5)
    pub interest_rate: f64,

    pub minimum_payment: Money,

    pub remaining_payments: u32,
}

impl Debt {
    /// Create a new debt
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        interest_rate: f64,
        minimum_payment: Money,
        remaining_payments: u32,
    ) -> Self {
        Self {
            id: DebtId::new(),
            name: name.into(),
            amount,
            interest_rate,
            minimum_payment,
            remaining_payments,
        }
    }

    /// Whether the debt has been fully paid off
    pub fn is_retired(&self) -> bool {
        !self.amount.is_positive()
    }

    /// Validate the debt
    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.name.trim().is_empty() {
            return Err(DebtValidationError::EmptyName);
        }

        if !self.amount.is_finite() || self.amount.is_negative() {
            return Err(DebtValidationError::NegativeBalance);
        }

        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(DebtValidationError::InvalidRate);
        }

        if !self.minimum_payment.is_finite() || !self.minimum_payment.is_positive() {
            return Err(DebtValidationError::NonPositiveMinimum);
        }

        Ok(())
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {}% ({} payments left)",
            self.name, self.amount, self.interest_rate, self.remaining_payments
        )
    }
}

/// Validation errors for debts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtValidationError {
    EmptyName,
    NegativeBalance,
    InvalidRate,
    NonPositiveMinimum,
}

impl fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Debt name cannot be empty"),
            Self::NegativeBalance => write!(f, "Debt balance cannot be negative"),
            Self::InvalidRate => write!(f, "Interest rate must be zero or positive"),
            Self::NonPositiveMinimum => write!(f, "Minimum payment must be greater than zero"),
        }
    }
}

impl std::error::Error for DebtValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        let mut debt = Debt::new("Cartão", Money::new(80000.0), 24.0, Money::new(8000.0), 10);
        assert!(debt.validate().is_ok());
        assert!(!debt.is_retired());

        debt.interest_rate = -1.0;
        assert_eq!(debt.validate(), Err(DebtValidationError::InvalidRate));

        debt.interest_rate = 0.0;
        debt.minimum_payment = Money::zero();
        assert_eq!(debt.validate(), Err(DebtValidationError::NonPositiveMinimum));
    }
}
