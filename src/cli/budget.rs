//! Budget CLI commands

use chrono::Utc;
use clap::Subcommand;

use super::{parse_category, parse_positive_amount, Session};
use crate::audit::{AuditEntry, EntityType};
use crate::engine::unbudgeted_categories;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, BudgetPeriod};
use crate::reports::BudgetOverviewReport;
use crate::state::FinanceAction;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a spending ceiling for a category
    Add {
        /// Category key or label (must not have a budget yet)
        category: String,
        /// Ceiling per period
        amount: String,
        /// monthly or weekly
        #[arg(short, long, default_value = "monthly")]
        period: String,
    },
    /// Show every budget with its utilization this period
    List,
    /// Remove a budget
    Delete {
        /// Budget ID or category
        budget: String,
    },
}

pub fn handle_budget_command(session: &mut Session, cmd: BudgetCommands) -> FinanceResult<()> {
    match cmd {
        BudgetCommands::Add {
            category,
            amount,
            period,
        } => {
            let category = parse_category(&category)?;
            let amount = parse_positive_amount(&amount)?;
            let period: BudgetPeriod = period
                .parse()
                .map_err(|e: crate::models::period::PeriodParseError| {
                    FinanceError::Validation(e.to_string())
                })?;

            if session.state.budgets.iter().any(|b| b.category == category) {
                return Err(FinanceError::Duplicate {
                    entity_type: "Budget",
                    identifier: category.key().to_string(),
                });
            }

            let budget = Budget::new(category, amount, period);
            budget
                .validate()
                .map_err(|e| FinanceError::Validation(e.to_string()))?;

            session.dispatch(FinanceAction::AddBudget(budget.clone()));
            session.commit(AuditEntry::create(
                EntityType::Budget,
                budget.id.to_string(),
                Some(category.key().to_string()),
                &budget,
            ))?;

            println!(
                "Created {} budget for {}: {}",
                budget.period,
                category.label(),
                budget.amount.format_with(session.currency())
            );

            let left = unbudgeted_categories(&session.state.budgets);
            if left.is_empty() {
                println!("Every expense category now has a budget.");
            }
        }

        BudgetCommands::List => {
            let report = BudgetOverviewReport::generate(
                &session.state.budgets,
                &session.state.transactions,
                Utc::now().date_naive(),
            );
            print!("{}", report.format_terminal(session.currency()));
        }

        BudgetCommands::Delete { budget } => {
            let found = session
                .state
                .find_budget(&budget)
                .cloned()
                .ok_or_else(|| FinanceError::budget_not_found(&budget))?;

            session.dispatch(FinanceAction::DeleteBudget(found.id));
            session.commit(AuditEntry::delete(
                EntityType::Budget,
                found.id.to_string(),
                Some(found.category.key().to_string()),
                &found,
            ))?;

            println!("Deleted budget for {}", found.category.label());
        }
    }

    Ok(())
}
