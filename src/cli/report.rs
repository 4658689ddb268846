//! CLI commands for reports
//!
//! Each report prints to the terminal, or writes CSV when `--output` is given.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Subcommand;

use super::Session;
use crate::error::{FinanceError, FinanceResult};
use crate::reports::{BudgetOverviewReport, MonthlyReport, SpendingReport, SummaryReport};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Dashboard: balance, totals, top categories, goals, debts and recent activity
    Summary,

    /// Expenses grouped by category
    Spending {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Income and expenses per calendar month
    Monthly {
        /// Number of months ending with the current one
        #[arg(short, long)]
        months: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Budgets against this period's spending
    #[command(alias = "budget")]
    Budgets {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn handle_report_command(session: &Session, cmd: ReportCommands) -> FinanceResult<()> {
    let currency = session.currency();
    let today = Utc::now().date_naive();

    match cmd {
        ReportCommands::Summary => {
            let report = SummaryReport::generate(&session.state, Utc::now());
            println!("{}", report.format_terminal(currency));
        }

        ReportCommands::Spending { top, output } => {
            let mut report = SpendingReport::generate(&session.state.transactions);
            if let Some(n) = top {
                report = report.top(n);
            }

            match output {
                Some(path) => {
                    write_csv(&path, |w| report.export_csv(w))?;
                    println!("Spending report exported to: {}", path.display());
                }
                None => println!("{}", report.format_terminal(currency)),
            }
        }

        ReportCommands::Monthly { months, output } => {
            let months = months.unwrap_or(session.settings.series_months);
            if months == 0 {
                return Err(FinanceError::Validation(
                    "Number of months must be at least 1".into(),
                ));
            }
            let report = MonthlyReport::generate(&session.state.transactions, today, months);

            match output {
                Some(path) => {
                    write_csv(&path, |w| report.export_csv(w))?;
                    println!("Monthly report exported to: {}", path.display());
                }
                None => println!("{}", report.format_terminal(currency)),
            }
        }

        ReportCommands::Budgets { output } => {
            let report = BudgetOverviewReport::generate(
                &session.state.budgets,
                &session.state.transactions,
                today,
            );

            match output {
                Some(path) => {
                    write_csv(&path, |w| report.export_csv(w))?;
                    println!("Budget report exported to: {}", path.display());
                }
                None => println!("{}", report.format_terminal(currency)),
            }
        }
    }

    Ok(())
}

fn write_csv<F>(path: &Path, export: F) -> FinanceResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> FinanceResult<()>,
{
    let file = File::create(path).map_err(|e| {
        FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export(&mut writer)?;
    writer.flush()?;
    Ok(())
}
