//! Debt CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_positive_amount, Session};
use crate::audit::{AuditEntry, EntityType};
use crate::display::debt::{format_debt_list, format_strategy};
use crate::engine::{apply_payment, DebtStrategy};
use crate::error::{FinanceError, FinanceResult};
use crate::models::Debt;
use crate::state::FinanceAction;

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// Record a debt
    Add {
        name: String,
        /// Outstanding balance
        amount: String,
        /// Annual interest rate in percent
        #[arg(short, long)]
        rate: f64,
        /// Minimum monthly payment
        #[arg(short, long)]
        minimum: String,
        /// Payments left; computed from balance and minimum when omitted
        #[arg(short, long)]
        payments: Option<u32>,
    },
    /// List debts
    List,
    /// Apply a payment to a debt
    Pay {
        /// Debt ID or name
        debt: String,
        amount: String,
    },
    /// Show payoff order
    Strategy {
        /// avalanche (highest rate first) or snowball (smallest balance first)
        #[arg(default_value = "avalanche", value_parser = ["avalanche", "snowball"])]
        method: String,
    },
    /// Remove a debt
    Delete {
        /// Debt ID or name
        debt: String,
    },
}

pub fn handle_debt_command(session: &mut Session, cmd: DebtCommands) -> FinanceResult<()> {
    match cmd {
        DebtCommands::Add {
            name,
            amount,
            rate,
            minimum,
            payments,
        } => {
            let amount = parse_amount(&amount)?;
            let minimum = parse_positive_amount(&minimum)?;
            let payments = payments
                .unwrap_or_else(|| (amount.value() / minimum.value()).ceil().max(0.0) as u32);

            let debt = Debt::new(name.trim(), amount, rate, minimum, payments);
            debt.validate()
                .map_err(|e| FinanceError::Validation(e.to_string()))?;

            if session.state.find_debt(&debt.name).is_some() {
                return Err(FinanceError::Duplicate {
                    entity_type: "Debt",
                    identifier: debt.name.clone(),
                });
            }

            session.dispatch(FinanceAction::AddDebt(debt.clone()));
            session.commit(AuditEntry::create(
                EntityType::Debt,
                debt.id.to_string(),
                Some(debt.name.clone()),
                &debt,
            ))?;

            println!(
                "Created debt {} ({}): {} at {}%, {} payments left",
                debt.name,
                debt.id,
                debt.amount.format_with(session.currency()),
                debt.interest_rate,
                debt.remaining_payments
            );
        }

        DebtCommands::List => {
            print!(
                "{}",
                format_debt_list(&session.state.debts, session.currency())
            );
        }

        DebtCommands::Pay { debt, amount } => {
            let before = find(session, &debt)?;
            let payment = parse_amount(&amount)?;
            let after = apply_payment(&before, payment)?;

            session.dispatch(FinanceAction::UpdateDebt(after.clone()));
            session.commit(AuditEntry::update(
                EntityType::Debt,
                after.id.to_string(),
                Some(after.name.clone()),
                &before,
                &after,
            ))?;

            if after.is_retired() {
                println!("{} is paid off!", after.name);
            } else {
                println!(
                    "Paid {} towards {}: {} left, {} payments remaining",
                    payment.format_with(session.currency()),
                    after.name,
                    after.amount.format_with(session.currency()),
                    after.remaining_payments
                );
            }
        }

        DebtCommands::Strategy { method } => {
            let strategy = if method == "snowball" {
                DebtStrategy::Snowball
            } else {
                DebtStrategy::Avalanche
            };

            if session.state.debts.is_empty() {
                println!("No debts recorded.");
            } else {
                print!(
                    "{}",
                    format_strategy(strategy, &session.state.debts, session.currency())
                );
            }
        }

        DebtCommands::Delete { debt } => {
            let found = find(session, &debt)?;

            session.dispatch(FinanceAction::DeleteDebt(found.id));
            session.commit(AuditEntry::delete(
                EntityType::Debt,
                found.id.to_string(),
                Some(found.name.clone()),
                &found,
            ))?;

            println!("Deleted debt: {}", found.name);
        }
    }

    Ok(())
}

fn find(session: &Session, key: &str) -> FinanceResult<Debt> {
    session
        .state
        .find_debt(key)
        .cloned()
        .ok_or_else(|| FinanceError::debt_not_found(key))
}
