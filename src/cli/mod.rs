//! CLI command handlers
//!
//! Bridges clap argument parsing with the engine, the state reducer and
//! storage. Every handler works on a [`Session`], which owns the loaded
//! state and writes changes back through storage and the audit log.

pub mod audit;
pub mod budget;
pub mod debt;
pub mod export;
pub mod goal;
pub mod loan;
pub mod report;
pub mod transaction;

pub use audit::{handle_audit_command, AuditArgs};
pub use budget::{handle_budget_command, BudgetCommands};
pub use debt::{handle_debt_command, DebtCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use loan::{handle_loan_command, LoanArgs};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::debug;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{FinancePaths, Settings};
use crate::engine::CurrencyFormat;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Money};
use crate::state::{reduce, FinanceAction, FinanceState};
use crate::storage::Storage;

/// Everything a command needs: settings, storage, audit log and the
/// current state for the configured user
pub struct Session {
    pub settings: Settings,
    pub storage: Storage,
    pub audit: AuditLogger,
    pub state: FinanceState,
}

impl Session {
    /// Open storage under `paths` and load the user's state
    pub fn open(paths: FinancePaths, settings: Settings) -> FinanceResult<Self> {
        let audit = AuditLogger::new(paths.audit_log());
        let storage = Storage::new(paths)?;
        let state = storage.load_state(&settings.user_id)?;
        debug!(records = state.record_count(), user = %settings.user_id, "session opened");

        Ok(Self {
            settings,
            storage,
            audit,
            state,
        })
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.settings.currency
    }

    pub fn user_id(&self) -> &str {
        &self.settings.user_id
    }

    /// Advance the in-memory state
    pub fn dispatch(&mut self, action: FinanceAction) {
        self.state = reduce(&self.state, action);
    }

    /// Persist budgets, goals and debts, then record `entry`
    pub fn commit(&self, entry: AuditEntry) -> FinanceResult<()> {
        self.storage.save_snapshot(&self.state)?;
        self.audit.log(&entry)
    }
}

/// Parse a user-typed amount such as `15000`, `15 000` or `15000 Kz`
pub fn parse_amount(input: &str) -> FinanceResult<Money> {
    Money::parse(input).map_err(|e| FinanceError::Validation(e.to_string()))
}

/// Parse an amount that must be strictly positive
pub fn parse_positive_amount(input: &str) -> FinanceResult<Money> {
    let amount = parse_amount(input)?;
    if !amount.is_positive() {
        return Err(FinanceError::InvalidAmount(amount.value()));
    }
    Ok(amount)
}

pub fn parse_date(input: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse a date and pin it to noon UTC, so it stays on the same calendar
/// day whatever the viewer's offset
pub fn parse_timestamp(input: &str) -> FinanceResult<DateTime<Utc>> {
    let date = parse_date(input)?;
    date.and_hms_opt(12, 0, 0)
        .map(|t| Utc.from_utc_datetime(&t))
        .ok_or_else(|| FinanceError::Validation(format!("Invalid date: {}", input)))
}

pub fn parse_category(input: &str) -> FinanceResult<Category> {
    input
        .parse()
        .map_err(|e: crate::models::CategoryParseError| FinanceError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("15 000 Kz").unwrap().value(), 15000.0);
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("250").unwrap().value(), 250.0);
        assert!(matches!(
            parse_positive_amount("0"),
            Err(FinanceError::InvalidAmount(_))
        ));
        assert!(parse_positive_amount("-5").is_err());
    }

    #[test]
    fn test_parse_timestamp_is_noon_utc() {
        let ts = parse_timestamp("2025-03-31").unwrap();
        assert_eq!(ts.date_naive().day(), 31);
        assert_eq!(ts.format("%H:%M").to_string(), "12:00");
        assert!(parse_timestamp("31/03/2025").is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("Saúde").unwrap(), Category::Healthcare);
        assert!(parse_category("gadgets").is_err());
    }
}
