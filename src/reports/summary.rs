//! Dashboard summary report

use chrono::{DateTime, Utc};

use crate::display::report::{double_separator, format_percentage};
use crate::display::transaction::format_transaction_row;
use crate::engine::{
    balance, budgeted_vs_actual, recent_transactions, spending_by_category, total_debt,
    total_expenses, total_income, total_minimum_payments, CategorySpending, CurrencyFormat,
};
use crate::models::{Money, Transaction};
use crate::state::FinanceState;

/// Number of recent transactions shown on the summary
pub const RECENT_COUNT: usize = 5;

/// Number of spending categories shown on the summary
pub const TOP_CATEGORIES: usize = 3;

#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
    pub budgeted_vs_actual: f64,
    pub goals_saved: Money,
    pub goals_target: Money,
    pub total_debt: Money,
    pub monthly_minimums: Money,
    pub top_categories: Vec<CategorySpending>,
    pub recent: Vec<Transaction>,
}

impl SummaryReport {
    pub fn generate(state: &FinanceState, now: DateTime<Utc>) -> Self {
        let txns = &state.transactions;
        Self {
            generated_at: now,
            income: total_income(txns),
            expenses: total_expenses(txns),
            balance: balance(txns),
            budgeted_vs_actual: budgeted_vs_actual(&state.budgets, txns),
            goals_saved: state.goals.iter().map(|g| g.current_amount).sum(),
            goals_target: state.goals.iter().map(|g| g.target_amount).sum(),
            total_debt: total_debt(&state.debts),
            monthly_minimums: total_minimum_payments(&state.debts),
            top_categories: spending_by_category(txns)
                .sorted_desc()
                .into_iter()
                .take(TOP_CATEGORIES)
                .collect(),
            recent: recent_transactions(txns, RECENT_COUNT),
        }
    }

    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Summary ({})\n",
            self.generated_at.format("%Y-%m-%d")
        ));
        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str(&format!("Balance:          {}\n", self.balance.format_with(currency)));
        output.push_str(&format!("Income:           {}\n", self.income.format_with(currency)));
        output.push_str(&format!("Expenses:         {}\n", self.expenses.format_with(currency)));
        output.push_str(&format!(
            "Budget used:      {}\n",
            format_percentage(self.budgeted_vs_actual)
        ));
        output.push_str(&format!(
            "Saved for goals:  {} of {}\n",
            self.goals_saved.format_with(currency),
            self.goals_target.format_with(currency)
        ));
        output.push_str(&format!(
            "Debt:             {} ({} / month minimum)\n",
            self.total_debt.format_with(currency),
            self.monthly_minimums.format_with(currency)
        ));

        if !self.top_categories.is_empty() {
            output.push_str("\nTop spending\n");
            for entry in &self.top_categories {
                output.push_str(&format!(
                    "  {:<16} {:>16}\n",
                    entry.category.label(),
                    entry.total.format_with(currency)
                ));
            }
        }

        output.push_str("\nRecent transactions\n");
        if self.recent.is_empty() {
            output.push_str("  none yet\n");
        }
        for txn in &self.recent {
            output.push_str(&format!("  {}\n", format_transaction_row(txn, currency)));
        }

        output
    }
}
