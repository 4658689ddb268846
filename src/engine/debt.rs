//! Debt repayment ordering and payment application

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Debt, Money};

/// Repayment priority strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStrategy {
    /// Highest interest rate first
    #[default]
    Avalanche,
    /// Smallest balance first
    Snowball,
}

impl DebtStrategy {
    /// Order `debts` by this strategy
    pub fn order(&self, debts: &[Debt]) -> Vec<Debt> {
        match self {
            Self::Avalanche => by_avalanche(debts),
            Self::Snowball => by_snowball(debts),
        }
    }
}

impl fmt::Display for DebtStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Avalanche => write!(f, "avalanche"),
            Self::Snowball => write!(f, "snowball"),
        }
    }
}

/// Debts sorted by descending interest rate; ties keep input order
pub fn by_avalanche(debts: &[Debt]) -> Vec<Debt> {
    let mut ordered = debts.to_vec();
    ordered.sort_by(|a, b| b.interest_rate.total_cmp(&a.interest_rate));
    ordered
}

/// Debts sorted by ascending balance; ties keep input order
pub fn by_snowball(debts: &[Debt]) -> Vec<Debt> {
    let mut ordered = debts.to_vec();
    ordered.sort_by(|a, b| a.amount.total_cmp(&b.amount));
    ordered
}

/// Debt after a payment of `payment`.
///
/// The balance never goes below zero. Remaining payments are recomputed
/// from the new balance and the minimum payment, so one large payment can
/// remove several scheduled payments at once.
pub fn apply_payment(debt: &Debt, payment: Money) -> FinanceResult<Debt> {
    if !payment.is_finite() || !payment.is_positive() {
        return Err(FinanceError::InvalidAmount(payment.value()));
    }

    let amount = (debt.amount - payment).non_negative();

    let remaining_payments = if amount.is_zero() {
        0
    } else {
        if !debt.minimum_payment.is_finite() || !debt.minimum_payment.is_positive() {
            return Err(FinanceError::InvalidInput(format!(
                "minimum payment of '{}' must be greater than zero",
                debt.name
            )));
        }
        (amount.value() / debt.minimum_payment.value()).ceil() as u32
    };

    Ok(Debt {
        amount,
        remaining_payments,
        ..debt.clone()
    })
}

/// Sum of outstanding balances
pub fn total_debt(debts: &[Debt]) -> Money {
    debts.iter().map(|d| d.amount).sum()
}

/// Sum of minimum payments across debts that are not yet retired
pub fn total_minimum_payments(debts: &[Debt]) -> Money {
    debts
        .iter()
        .filter(|d| !d.is_retired())
        .map(|d| d.minimum_payment)
        .sum()
}
