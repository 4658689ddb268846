//! Whole-document store for budgets, goals and debts
//!
//! The three collections live together in `finance.json` and are always
//! loaded and saved as one unit.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FinanceError;
use crate::models::{Budget, Debt, Goal};
use crate::state::FinanceState;

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of `finance.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceSnapshot {
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub debts: Vec<Debt>,
}

impl FinanceSnapshot {
    /// The non-transaction part of `state`
    pub fn from_state(state: &FinanceState) -> Self {
        Self {
            budgets: state.budgets.clone(),
            goals: state.goals.clone(),
            debts: state.debts.clone(),
        }
    }
}

/// Loads and saves [`FinanceSnapshot`] documents
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the snapshot; a missing file is an empty snapshot
    pub fn load(&self) -> Result<FinanceSnapshot, FinanceError> {
        let snapshot: FinanceSnapshot = read_json(&self.path)?;
        debug!(
            budgets = snapshot.budgets.len(),
            goals = snapshot.goals.len(),
            debts = snapshot.debts.len(),
            "loaded finance snapshot"
        );
        Ok(snapshot)
    }

    /// Replace the stored snapshot
    pub fn save(&self, snapshot: &FinanceSnapshot) -> Result<(), FinanceError> {
        write_json_atomic(&self.path, snapshot)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, Category, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("finance.json"));

        assert_eq!(store.load().unwrap(), FinanceSnapshot::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("data").join("finance.json"));

        let snapshot = FinanceSnapshot {
            budgets: vec![Budget::new(
                Category::Food,
                Money::new(50000.0),
                BudgetPeriod::Monthly,
            )],
            goals: vec![Goal::new(
                "Fundo de emergência",
                Money::new(300000.0),
                NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            )],
            debts: vec![Debt::new(
                "Cartão",
                Money::new(80000.0),
                24.0,
                Money::new(10000.0),
                8,
            )],
        };

        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), snapshot);
    }

    #[test]
    fn test_partial_document_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finance.json");
        std::fs::write(&path, r#"{"goals": []}"#).unwrap();

        let snapshot = SnapshotStore::new(path).load().unwrap();
        assert!(snapshot.budgets.is_empty());
        assert!(snapshot.debts.is_empty());
    }
}
