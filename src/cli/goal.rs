//! Savings goal CLI commands

use chrono::Utc;
use clap::Subcommand;

use super::{parse_amount, parse_date, parse_positive_amount, Session};
use crate::audit::{AuditEntry, EntityType};
use crate::display::goal::format_goal_list;
use crate::engine::{add_contribution, goal_status};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Goal, Money};
use crate::state::FinanceAction;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        name: String,
        /// Amount to reach
        target: String,
        /// Target date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Amount already saved
        #[arg(short, long)]
        saved: Option<String>,
    },
    /// Show goals with progress and pacing
    List,
    /// Add money to a goal
    Contribute {
        /// Goal ID or name
        goal: String,
        amount: String,
    },
    /// Remove a goal
    Delete {
        /// Goal ID or name
        goal: String,
    },
}

pub fn handle_goal_command(session: &mut Session, cmd: GoalCommands) -> FinanceResult<()> {
    match cmd {
        GoalCommands::Add {
            name,
            target,
            date,
            saved,
        } => {
            let mut goal = Goal::new(name.trim(), parse_amount(&target)?, parse_date(&date)?);
            if let Some(saved) = saved {
                goal.current_amount = parse_amount(&saved)?;
            }
            goal.validate()
                .map_err(|e| FinanceError::Validation(e.to_string()))?;

            if session.state.find_goal(&goal.name).is_some() {
                return Err(FinanceError::Duplicate {
                    entity_type: "Goal",
                    identifier: goal.name.clone(),
                });
            }

            session.dispatch(FinanceAction::AddGoal(goal.clone()));
            session.commit(AuditEntry::create(
                EntityType::Goal,
                goal.id.to_string(),
                Some(goal.name.clone()),
                &goal,
            ))?;

            println!(
                "Created goal {} ({}): {} by {}",
                goal.name,
                goal.id,
                goal.target_amount.format_with(session.currency()),
                goal.target_date
            );
        }

        GoalCommands::List => {
            print!(
                "{}",
                format_goal_list(&session.state.goals, Utc::now(), session.currency())
            );
        }

        GoalCommands::Contribute { goal, amount } => {
            let before = find(session, &goal)?;
            let amount: Money = parse_positive_amount(&amount)?;
            let after = add_contribution(&before, amount)?;

            session.dispatch(FinanceAction::UpdateGoal(after.clone()));
            session.commit(AuditEntry::update(
                EntityType::Goal,
                after.id.to_string(),
                Some(after.name.clone()),
                &before,
                &after,
            ))?;

            let status = goal_status(&after, Utc::now());
            println!(
                "Added {} to {}: {} of {} saved",
                amount.format_with(session.currency()),
                after.name,
                after.current_amount.format_with(session.currency()),
                after.target_amount.format_with(session.currency())
            );
            if status.is_completed {
                println!("Goal reached!");
            }
        }

        GoalCommands::Delete { goal } => {
            let found = find(session, &goal)?;

            session.dispatch(FinanceAction::DeleteGoal(found.id));
            session.commit(AuditEntry::delete(
                EntityType::Goal,
                found.id.to_string(),
                Some(found.name.clone()),
                &found,
            ))?;

            println!("Deleted goal: {}", found.name);
        }
    }

    Ok(())
}

fn find(session: &Session, key: &str) -> FinanceResult<Goal> {
    session
        .state
        .find_goal(key)
        .cloned()
        .ok_or_else(|| FinanceError::goal_not_found(key))
}
