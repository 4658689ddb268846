//! Finance aggregation engine
//!
//! Pure functions that turn collections of transactions, budgets, goals and
//! debts into the derived values reports display. Nothing in here performs
//! I/O or mutates its inputs; every function borrows a snapshot and returns
//! freshly built values.
//!
//! All percentages go through [`percent`], which returns `0.0` when the
//! denominator is zero or negative, so no report ever shows `NaN` or
//! `Infinity`.

pub mod amortization;
pub mod budget;
pub mod currency;
pub mod debt;
pub mod goal;
pub mod monthly;
pub mod spending;
pub mod totals;
pub mod transactions;

pub use amortization::{amortize, AmortizationRow, LoanSummary, MAX_TERM_MONTHS};
pub use budget::{
    budget_utilization, budgeted_vs_actual, derived_spent, rank_by_utilization, remaining,
    remaining_overall, total_budgeted, unbudgeted_categories, with_derived_spent,
    BudgetUtilization,
};
pub use currency::{format_currency, CurrencyFormat};
pub use debt::{
    apply_payment, by_avalanche, by_snowball, total_debt, total_minimum_payments, DebtStrategy,
};
pub use goal::{
    add_contribution, days_remaining, goal_progress, goal_status, is_completed,
    suggested_monthly_contribution, GoalStatus,
};
pub use monthly::{monthly_series, MonthBucket, DEFAULT_SERIES_MONTHS};
pub use spending::{spending_by_category, CategorySpending, SpendingByCategory};
pub use totals::{balance, total_income, total_expenses};
pub use transactions::{
    filter_transactions, recent_transactions, SortField, SortOrder, TransactionFilter,
    TransactionKind, TransactionSort,
};

/// `part` as a percentage of `whole`.
///
/// Returns `0.0` when `whole` is zero, negative or non-finite, or when the
/// quotient is not finite. This is the only percentage rule in the crate.
pub fn percent(part: f64, whole: f64) -> f64 {
    if !whole.is_finite() || whole <= 0.0 {
        return 0.0;
    }

    let value = part / whole * 100.0;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::models::{Category, Money, Transaction};

    pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    pub fn expense(amount: f64, category: Category, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::expense("expense", Money::new(amount), category, at(y, m, d))
    }

    pub fn income(amount: f64, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::income("income", Money::new(amount), at(y, m, d))
    }

    pub fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }
}
