//! Monthly income vs. expenses report

use std::io::Write;

use chrono::NaiveDate;

use crate::display::report::{format_bar, separator};
use crate::engine::{monthly_series, CurrencyFormat, MonthBucket};
use crate::error::FinanceResult;
use crate::models::Transaction;

use super::{amount_cell, csv_error};

const BAR_WIDTH: usize = 16;

/// Income and expenses for consecutive months ending at a reference month
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub buckets: Vec<MonthBucket>,
}

impl MonthlyReport {
    pub fn generate(transactions: &[Transaction], reference: NaiveDate, months: usize) -> Self {
        Self {
            buckets: monthly_series(transactions, reference, months),
        }
    }

    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        let largest = self
            .buckets
            .iter()
            .flat_map(|b| [b.income.value(), b.expenses.value()])
            .fold(0.0_f64, f64::max);

        let mut output = String::new();
        output.push_str(&format!(
            "{:<8} {:>16} {:>16} {:>16}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        output.push_str(&separator(59));
        output.push('\n');

        for bucket in &self.buckets {
            output.push_str(&format!(
                "{} {} {:>16} {:>16} {:>16}\n",
                bucket.label,
                bucket.year,
                bucket.income.format_with(currency),
                bucket.expenses.format_with(currency),
                bucket.net().format_with(currency)
            ));
            output.push_str(&format!(
                "         in  {}\n         out {}\n",
                format_bar(bucket.income.value(), largest, BAR_WIDTH),
                format_bar(bucket.expenses.value(), largest, BAR_WIDTH)
            ));
        }

        output
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> FinanceResult<()> {
        let mut csv = ::csv::Writer::from_writer(writer);
        csv.write_record(["Year", "Month", "Label", "Income", "Expenses", "Net"])
            .map_err(csv_error)?;

        for bucket in &self.buckets {
            csv.write_record([
                bucket.year.to_string(),
                bucket.month.to_string(),
                bucket.label.to_string(),
                amount_cell(bucket.income),
                amount_cell(bucket.expenses),
                amount_cell(bucket.net()),
            ])
            .map_err(csv_error)?;
        }

        csv.flush().map_err(csv_error)
    }
}
