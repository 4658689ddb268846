//! Savings goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal with a target amount and date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,

    pub name: String,

    pub target_amount: Money,

    /// Saved so far; may exceed the target
    #[serde(default)]
    pub current_amount: Money,

    pub target_date: NaiveDate,
}

impl Goal {
    /// Create a new goal with nothing saved yet
    pub fn new(name: impl Into<String>, target_amount: Money, target_date: NaiveDate) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            target_date,
        }
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_finite() || !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }

        if !self.current_amount.is_finite() || self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeSaved);
        }

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} by {}",
            self.name,
            self.current_amount,
            self.target_amount,
            self.target_date.format("%Y-%m-%d")
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget,
    NegativeSaved,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Goal target must be greater than zero"),
            Self::NegativeSaved => write!(f, "Saved amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let mut goal = Goal::new("Fundo de emergência", Money::new(150000.0), date);
        assert!(goal.validate().is_ok());

        goal.target_amount = Money::zero();
        assert_eq!(goal.validate(), Err(GoalValidationError::NonPositiveTarget));

        goal.target_amount = Money::new(10.0);
        goal.name = String::new();
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));
    }
}
