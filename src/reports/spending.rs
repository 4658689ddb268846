//! Spending by category report

use std::io::Write;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::engine::{spending_by_category, CategorySpending, CurrencyFormat};
use crate::error::FinanceResult;
use crate::models::{Money, Transaction};

use super::{amount_cell, csv_error};

/// One category line of the report
#[derive(Debug, Clone)]
pub struct SpendingRow {
    pub spending: CategorySpending,
    /// Share of all spending, in percent
    pub share: f64,
}

/// Expenses per category, largest first
#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub rows: Vec<SpendingRow>,
    pub total: Money,
}

impl SpendingReport {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let spending = spending_by_category(transactions);
        let rows = spending
            .sorted_desc()
            .into_iter()
            .map(|entry| SpendingRow {
                share: spending.share(entry.category),
                spending: entry,
            })
            .collect();

        Self {
            rows,
            total: spending.total(),
        }
    }

    /// Keep only the `limit` largest categories
    pub fn top(mut self, limit: usize) -> Self {
        self.rows.truncate(limit);
        self
    }

    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        let mut output = String::new();
        output.push_str("Spending by Category\n");
        output.push_str(&separator(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        let largest = self.rows[0].spending.total.value();
        for row in &self.rows {
            output.push_str(&format!(
                "{:<16} {:>16} {:>6} {:>4}x {}\n",
                row.spending.category.label(),
                row.spending.total.format_with(currency),
                format_percentage(row.share),
                row.spending.count,
                format_bar(row.spending.total.value(), largest, 20)
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Total",
            self.total.format_with(currency)
        ));
        output
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> FinanceResult<()> {
        let mut csv = ::csv::Writer::from_writer(writer);
        csv.write_record(["Category", "Label", "Total", "Transactions", "Share"])
            .map_err(csv_error)?;

        for row in &self.rows {
            csv.write_record([
                row.spending.category.key().to_string(),
                row.spending.category.label().to_string(),
                amount_cell(row.spending.total),
                row.spending.count.to_string(),
                format!("{:.2}", row.share),
            ])
            .map_err(csv_error)?;
        }

        csv.flush().map_err(csv_error)
    }
}
