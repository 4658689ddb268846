//! Reports for kwanza-cli
//!
//! Each report is generated from a state snapshot, then either rendered for
//! the terminal or exported as CSV.

pub mod budget_overview;
pub mod monthly;
pub mod spending;
pub mod summary;

pub use budget_overview::BudgetOverviewReport;
pub use monthly::MonthlyReport;
pub use spending::SpendingReport;
pub use summary::SummaryReport;

use crate::error::FinanceError;

fn csv_error<E: std::fmt::Display>(e: E) -> FinanceError {
    FinanceError::Export(e.to_string())
}

fn amount_cell(amount: crate::models::Money) -> String {
    format!("{:.2}", amount.value())
}
