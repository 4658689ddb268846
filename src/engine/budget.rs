//! Budget utilization and budget-level aggregates

use chrono::NaiveDate;

use crate::models::{Budget, BudgetId, Category, Money, Transaction};

use super::percent;
use super::totals::total_expenses;

/// How much of a budget has been used
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUtilization {
    pub budget_id: BudgetId,
    pub category: Category,
    pub amount: Money,
    pub spent: Money,
    /// Unclamped percentage of the ceiling spent
    pub percent_used: f64,
    pub is_over_budget: bool,
    /// Amount left; negative by the overspend when over budget
    pub remaining: Money,
}

impl BudgetUtilization {
    /// Percentage clamped to 100 for progress bars
    pub fn display_percent(&self) -> f64 {
        self.percent_used.min(100.0)
    }
}

/// Utilization of a single budget based on its `spent` field
pub fn budget_utilization(budget: &Budget) -> BudgetUtilization {
    let percent_used = percent(budget.spent.value(), budget.amount.value());

    BudgetUtilization {
        budget_id: budget.id,
        category: budget.category,
        amount: budget.amount,
        spent: budget.spent,
        percent_used,
        is_over_budget: budget.spent > budget.amount,
        remaining: remaining(budget),
    }
}

/// Amount left in the budget.
///
/// Over budget this is `-(spent - amount)`, the overspend as a negative
/// number; otherwise `amount - spent`.
pub fn remaining(budget: &Budget) -> Money {
    if budget.spent > budget.amount {
        -(budget.spent - budget.amount)
    } else {
        budget.amount - budget.spent
    }
}

/// Sum of all budget ceilings
pub fn total_budgeted(budgets: &[Budget]) -> Money {
    budgets.iter().map(|b| b.amount).sum()
}

/// Total budgeted minus every expense, budgeted category or not
pub fn remaining_overall(budgets: &[Budget], transactions: &[Transaction]) -> Money {
    total_budgeted(budgets) - total_expenses(transactions)
}

/// All expenses as a percentage of the total budgeted
pub fn budgeted_vs_actual(budgets: &[Budget], transactions: &[Transaction]) -> f64 {
    percent(
        total_expenses(transactions).value(),
        total_budgeted(budgets).value(),
    )
}

/// Utilization of every budget, most used first
pub fn rank_by_utilization(budgets: &[Budget]) -> Vec<BudgetUtilization> {
    let mut ranked: Vec<BudgetUtilization> = budgets.iter().map(budget_utilization).collect();
    ranked.sort_by(|a, b| b.percent_used.total_cmp(&a.percent_used));
    ranked
}

/// Expense categories that have no budget yet
pub fn unbudgeted_categories(budgets: &[Budget]) -> Vec<Category> {
    Category::EXPENSE
        .iter()
        .copied()
        .filter(|c| !budgets.iter().any(|b| b.category == *c))
        .collect()
}

/// Spending that counts against `budget` in the period containing
/// `reference`: expenses of the budget's category dated inside that window.
pub fn derived_spent(budget: &Budget, transactions: &[Transaction], reference: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense && t.category == budget.category)
        .filter(|t| budget.period.contains(reference, t.day()))
        .map(|t| t.amount)
        .sum()
}

/// Copies of `budgets` whose `spent` is recomputed from transactions
pub fn with_derived_spent(
    budgets: &[Budget],
    transactions: &[Transaction],
    reference: NaiveDate,
) -> Vec<Budget> {
    budgets
        .iter()
        .map(|b| b.with_spent(derived_spent(b, transactions, reference)))
        .collect()
}
