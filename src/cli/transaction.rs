//! Transaction CLI commands

use chrono::Utc;
use clap::Subcommand;
use tracing::info;

use super::{parse_category, parse_positive_amount, parse_timestamp, Session};
use crate::audit::{AuditEntry, EntityType};
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::engine::{
    filter_transactions, SortField, SortOrder, TransactionFilter, TransactionKind, TransactionSort,
};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Transaction};
use crate::state::FinanceAction;
use crate::storage::{TransactionBackend, TransactionDraft};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an expense, or income with --income
    Add {
        /// What the money was for
        description: String,
        /// Amount (e.g. "15000" or "15 000 Kz")
        amount: String,
        /// Category key or label; expenses default to "other"
        #[arg(short, long)]
        category: Option<String>,
        /// Record as income instead of an expense
        #[arg(long)]
        income: bool,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions
    List {
        /// Text to look for in description or category
        #[arg(short, long)]
        search: Option<String>,
        /// Only this category
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// all, income or expense
        #[arg(short, long, default_value = "all", value_parser = ["all", "income", "expense"])]
        kind: String,
        /// Sort by date or amount
        #[arg(long, default_value = "date", value_parser = ["date", "amount"])]
        sort: String,
        /// Ascending order (default is descending)
        #[arg(long)]
        asc: bool,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    session: &mut Session,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            income,
            date,
        } => {
            let amount = parse_positive_amount(&amount)?;
            let category = match category {
                Some(c) => parse_category(&c)?,
                None if income => Category::Income,
                None => Category::Other,
            };
            let date = match date {
                Some(d) => parse_timestamp(&d)?,
                None => Utc::now(),
            };

            let draft = TransactionDraft {
                amount,
                description: description.trim().to_string(),
                category,
                date,
                is_expense: !income,
            };
            let txn = session
                .storage
                .transactions
                .create(session.user_id(), draft)?;

            session.dispatch(FinanceAction::AddTransaction(txn.clone()));
            session.audit.log(&AuditEntry::create(
                EntityType::Transaction,
                txn.id.to_string(),
                Some(txn.description.clone()),
                &txn,
            ))?;

            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, session.currency()));
        }

        TransactionCommands::List {
            search,
            category,
            kind,
            sort,
            asc,
            limit,
        } => {
            let mut filter = TransactionFilter::new().kind(match kind.as_str() {
                "income" => TransactionKind::Income,
                "expense" => TransactionKind::Expense,
                _ => TransactionKind::All,
            });
            if let Some(term) = search {
                filter = filter.search(term);
            }
            if let Some(c) = category {
                filter = filter.category(parse_category(&c)?);
            }

            let field = if sort == "amount" {
                SortField::Amount
            } else {
                SortField::Date
            };
            let order = if asc { SortOrder::Asc } else { SortOrder::Desc };

            let mut transactions = filter_transactions(
                &session.state.transactions,
                &filter,
                TransactionSort::new(field, order),
            );
            let matched = transactions.len();
            transactions.truncate(limit);

            print!(
                "{}",
                format_transaction_register(&transactions, session.currency())
            );
            if matched > transactions.len() {
                println!("Showing {} of {} transactions", transactions.len(), matched);
            }
        }

        TransactionCommands::Show { id } => {
            let txn = find(session, &id)?;
            print!("{}", format_transaction_details(&txn, session.currency()));
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
        } => {
            let before = find(session, &id)?;
            let mut after = before.clone();

            if let Some(a) = amount {
                after.amount = parse_positive_amount(&a)?;
            }
            if let Some(d) = description {
                after.description = d.trim().to_string();
            }
            if let Some(c) = category {
                after.category = parse_category(&c)?;
            }
            if let Some(d) = date {
                after.date = parse_timestamp(&d)?;
            }

            if after == before {
                println!("Nothing to change.");
                return Ok(());
            }

            let updated = session.storage.transactions.update(&after)?;
            session.dispatch(FinanceAction::UpdateTransaction(updated.clone()));
            session.audit.log(&AuditEntry::update(
                EntityType::Transaction,
                updated.id.to_string(),
                Some(updated.description.clone()),
                &before,
                &updated,
            ))?;

            println!("Updated transaction:");
            print!("{}", format_transaction_details(&updated, session.currency()));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = find(session, &id)?;

            if !force {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(&txn, session.currency()));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            session.storage.transactions.delete(txn.id)?;
            session.dispatch(FinanceAction::DeleteTransaction(txn.id));
            session.audit.log(&AuditEntry::delete(
                EntityType::Transaction,
                txn.id.to_string(),
                Some(txn.description.clone()),
                &txn,
            ))?;

            info!(id = %txn.id, "transaction removed from session");
            println!("Deleted transaction: {} ({})", txn.id, txn.description);
        }
    }

    Ok(())
}

fn find(session: &Session, id: &str) -> FinanceResult<Transaction> {
    session
        .state
        .find_transaction(id)
        .cloned()
        .ok_or_else(|| FinanceError::transaction_not_found(id))
}
