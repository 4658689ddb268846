//! Income, expense and balance totals

use crate::models::{Money, Transaction};

/// Sum of all non-expense transactions
pub fn total_income(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| !t.is_expense)
        .map(|t| t.amount)
        .sum()
}

/// Sum of all expense transactions
pub fn total_expenses(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense)
        .map(|t| t.amount)
        .sum()
}

/// Income minus expenses; may be negative
pub fn balance(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expenses(transactions)
}
