//! JSON export of the full finance state

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, Debt, Goal, Transaction};
use crate::state::FinanceState;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Version of kwanza-cli that wrote the export
    pub app_version: String,

    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
    pub debts: Vec<Debt>,

    pub metadata: ExportMetadata,
}

/// Counts and date range, for a reader skimming the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,
    pub goal_count: usize,
    pub debt_count: usize,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl FullExport {
    pub fn from_state(state: &FinanceState) -> Self {
        let day = |t: &Transaction| t.day();
        let metadata = ExportMetadata {
            transaction_count: state.transactions.len(),
            budget_count: state.budgets.len(),
            goal_count: state.goals.len(),
            debt_count: state.debts.len(),
            earliest_transaction: state.transactions.iter().map(day).min().map(|d| d.to_string()),
            latest_transaction: state.transactions.iter().map(day).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: state.transactions.clone(),
            budgets: state.budgets.clone(),
            goals: state.goals.clone(),
            debts: state.debts.clone(),
            metadata,
        }
    }
}

/// Write the full state as JSON
pub fn export_full_json<W: Write>(
    state: &FinanceState,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = FullExport::from_state(state);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))
}
