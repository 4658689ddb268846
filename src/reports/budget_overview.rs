//! Budget overview report
//!
//! Utilization of every budget for the period containing a reference date,
//! with `spent` derived from transactions and rows ranked most used first.

use std::io::Write;

use chrono::NaiveDate;

use crate::display::report::{format_percentage, progress_bar, separator};
use crate::engine::{
    budgeted_vs_actual, rank_by_utilization, remaining_overall, total_budgeted,
    unbudgeted_categories, with_derived_spent, BudgetUtilization, CurrencyFormat,
};
use crate::error::FinanceResult;
use crate::models::{Budget, Category, Money, Transaction};

use super::{amount_cell, csv_error};

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    pub reference: NaiveDate,
    pub rows: Vec<BudgetUtilization>,
    pub total_budgeted: Money,
    /// Spending counted against budgets in their current windows
    pub total_spent: Money,
    /// All expenses as a percentage of the total budgeted
    pub budgeted_vs_actual: f64,
    /// Total budgeted minus every expense
    pub remaining_overall: Money,
    /// Expense categories still without a budget
    pub unbudgeted: Vec<Category>,
}

impl BudgetOverviewReport {
    pub fn generate(
        budgets: &[Budget],
        transactions: &[Transaction],
        reference: NaiveDate,
    ) -> Self {
        let current = with_derived_spent(budgets, transactions, reference);
        let rows = rank_by_utilization(&current);

        Self {
            reference,
            total_spent: rows.iter().map(|r| r.spent).sum(),
            total_budgeted: total_budgeted(budgets),
            budgeted_vs_actual: budgeted_vs_actual(budgets, transactions),
            remaining_overall: remaining_overall(budgets, transactions),
            unbudgeted: unbudgeted_categories(budgets),
            rows,
        }
    }

    pub fn over_budget_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_over_budget).count()
    }

    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        let mut output = String::new();
        output.push_str(&format!("Budgets as of {}\n", self.reference));
        output.push_str(&separator(90));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets set.\n");
        }

        for row in &self.rows {
            let marker = if row.is_over_budget { " *" } else { "" };
            output.push_str(&format!(
                "{:12} {:<16} {} {:>6} {:>14} / {:<14} left {}{}\n",
                row.budget_id.to_string(),
                row.category.label(),
                progress_bar(row.display_percent(), BAR_WIDTH),
                format_percentage(row.percent_used),
                row.spent.format_with(currency),
                row.amount.format_with(currency),
                row.remaining.format_with(currency),
                marker
            ));
        }

        output.push_str(&separator(90));
        output.push('\n');
        output.push_str(&format!(
            "Budgeted {}, spent in budgets {}\n",
            self.total_budgeted.format_with(currency),
            self.total_spent.format_with(currency)
        ));
        output.push_str(&format!(
            "All expenses vs. budget: {} ({} remaining)\n",
            format_percentage(self.budgeted_vs_actual),
            self.remaining_overall.format_with(currency)
        ));

        if self.over_budget_count() > 0 {
            output.push_str("* = over budget\n");
        }

        if !self.unbudgeted.is_empty() {
            let names: Vec<&str> = self.unbudgeted.iter().map(|c| c.key()).collect();
            output.push_str(&format!("Without a budget: {}\n", names.join(", ")));
        }

        output
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> FinanceResult<()> {
        let mut csv = ::csv::Writer::from_writer(writer);
        csv.write_record([
            "Category", "Budgeted", "Spent", "Remaining", "Percent Used", "Over Budget",
        ])
        .map_err(csv_error)?;

        for row in &self.rows {
            csv.write_record([
                row.category.key().to_string(),
                amount_cell(row.amount),
                amount_cell(row.spent),
                amount_cell(row.remaining),
                format!("{:.2}", row.percent_used),
                row.is_over_budget.to_string(),
            ])
            .map_err(csv_error)?;
        }

        csv.flush().map_err(csv_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::expense;
    use crate::models::BudgetPeriod;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn report() -> BudgetOverviewReport {
        let budgets = vec![
            Budget::new(Category::Food, Money::new(50000.0), BudgetPeriod::Monthly),
            Budget::new(Category::Housing, Money::new(100000.0), BudgetPeriod::Monthly),
        ];
        let txns = vec![
            expense(40000.0, Category::Food, 2025, 3, 2),
            expense(20000.0, Category::Food, 2025, 3, 9),
            // Previous month, outside the window
            expense(99000.0, Category::Food, 2025, 2, 27),
            expense(30000.0, Category::Housing, 2025, 3, 1),
        ];
        BudgetOverviewReport::generate(&budgets, &txns, reference())
    }

    #[test]
    fn test_generate_derives_spent_and_ranks() {
        let report = report();

        assert_eq!(report.rows[0].category, Category::Food);
        assert_eq!(report.rows[0].spent.value(), 60000.0);
        assert!(report.rows[0].is_over_budget);
        assert_eq!(report.rows[1].spent.value(), 30000.0);
        assert_eq!(report.over_budget_count(), 1);
        assert_eq!(report.total_spent.value(), 90000.0);
        assert_eq!(report.total_budgeted.value(), 150000.0);
        assert_eq!(report.unbudgeted.len(), 10);
    }

    #[test]
    fn test_format_terminal() {
        let output = report().format_terminal(&CurrencyFormat::default());
        assert!(output.contains("Alimentação"));
        assert!(output.contains("120%"));
        assert!(output.contains("-10 000 Kz *"));
        assert!(output.contains("* = over budget"));
    }

    #[test]
    fn test_empty() {
        let report = BudgetOverviewReport::generate(&[], &[], reference());
        assert!(report.rows.is_empty());
        assert_eq!(report.budgeted_vs_actual, 0.0);
        assert!(report
            .format_terminal(&CurrencyFormat::default())
            .contains("No budgets set."));
    }

    #[test]
    fn test_export_csv() {
        let mut output = Vec::new();
        report().export_csv(&mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("food,50000.00,60000.00,-10000.00,120.00,true"));
    }
}
