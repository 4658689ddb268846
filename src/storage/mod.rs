//! Storage layer for kwanza-cli
//!
//! JSON files with atomic writes. Budgets, goals and debts are stored as one
//! snapshot document; transactions go through [`TransactionBackend`].

pub mod file_io;
pub mod snapshot;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use snapshot::{FinanceSnapshot, SnapshotStore};
pub use transactions::{JsonTransactionBackend, TransactionBackend, TransactionDraft};

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;
use crate::state::FinanceState;

/// Main storage coordinator
pub struct Storage {
    paths: FinancePaths,
    pub snapshot: SnapshotStore,
    pub transactions: JsonTransactionBackend,
}

impl Storage {
    /// Open storage rooted at `paths`, creating directories as needed
    pub fn new(paths: FinancePaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            snapshot: SnapshotStore::new(paths.finance_file()),
            transactions: JsonTransactionBackend::open(paths.transactions_file())?,
            paths,
        })
    }

    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    /// Build the full state for `user_id` from disk
    pub fn load_state(&self, user_id: &str) -> Result<FinanceState, FinanceError> {
        let snapshot = self.snapshot.load()?;
        Ok(FinanceState {
            transactions: self.transactions.fetch_all(user_id)?,
            budgets: snapshot.budgets,
            goals: snapshot.goals,
            debts: snapshot.debts,
        })
    }

    /// Persist the budgets, goals and debts of `state`
    pub fn save_snapshot(&self, state: &FinanceState) -> Result<(), FinanceError> {
        self.snapshot.save(&FinanceSnapshot::from_state(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::at;
    use crate::models::{Category, Goal, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.load_state("local").unwrap(), FinanceState::default());
    }

    #[test]
    fn test_load_state_combines_sources() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .transactions
            .create(
                "local",
                TransactionDraft {
                    amount: Money::new(2500.0),
                    description: "Candongueiro".into(),
                    category: Category::Transportation,
                    date: at(2025, 4, 2),
                    is_expense: true,
                },
            )
            .unwrap();

        let mut state = FinanceState::default();
        state.goals.push(Goal::new(
            "Viagem",
            Money::new(200000.0),
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        ));
        storage.save_snapshot(&state).unwrap();

        let loaded = storage.load_state("local").unwrap();
        assert_eq!(loaded.transactions.len(), 1);
        assert_eq!(loaded.goals, state.goals);
    }
}
