//! Transaction persistence
//!
//! [`TransactionBackend`] is the contract the rest of the crate uses to
//! read and write transactions; [`JsonTransactionBackend`] fulfils it with a
//! local `transactions.json`. Records carry the id of the user that created
//! them and every read is scoped to one user.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FinanceError, FinanceResult};
use crate::models::ids::TransactionId;
use crate::models::{Category, Money, Transaction};

use super::file_io::{read_json, write_json_atomic};

/// A transaction that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub amount: Money,
    pub description: String,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub is_expense: bool,
}

impl TransactionDraft {
    fn into_transaction(self) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            amount: self.amount,
            description: self.description,
            category: self.category,
            date: self.date,
            is_expense: self.is_expense,
        }
    }
}

/// Storage contract for transactions
pub trait TransactionBackend {
    /// Every transaction owned by `user_id`, newest first
    fn fetch_all(&self, user_id: &str) -> FinanceResult<Vec<Transaction>>;

    /// Store a new transaction for `user_id` and return it with its id
    fn create(&self, user_id: &str, draft: TransactionDraft) -> FinanceResult<Transaction>;

    /// Replace the stored transaction with the same id
    fn update(&self, transaction: &Transaction) -> FinanceResult<Transaction>;

    /// Remove a transaction
    fn delete(&self, id: TransactionId) -> FinanceResult<()>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransactionRecord {
    #[serde(flatten)]
    transaction: Transaction,
    created_by: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<TransactionRecord>,
}

/// [`TransactionBackend`] over a JSON file
pub struct JsonTransactionBackend {
    path: PathBuf,
    records: RwLock<Vec<TransactionRecord>>,
}

impl JsonTransactionBackend {
    /// Open the backend, loading any existing records
    pub fn open(path: PathBuf) -> FinanceResult<Self> {
        let data: TransactionData = read_json(&path)?;
        debug!(
            count = data.transactions.len(),
            path = %path.display(),
            "loaded transactions"
        );

        Ok(Self {
            path,
            records: RwLock::new(data.transactions),
        })
    }

    fn persist(&self, records: &[TransactionRecord]) -> FinanceResult<()> {
        let data = TransactionData {
            transactions: records.to_vec(),
        };
        write_json_atomic(&self.path, &data)
    }
}

fn lock_error<E: std::fmt::Display>(e: E) -> FinanceError {
    FinanceError::Storage(format!("Failed to acquire lock: {}", e))
}

impl TransactionBackend for JsonTransactionBackend {
    fn fetch_all(&self, user_id: &str) -> FinanceResult<Vec<Transaction>> {
        let records = self.records.read().map_err(lock_error)?;

        let mut owned: Vec<&TransactionRecord> = records
            .iter()
            .filter(|r| r.created_by == user_id)
            .collect();
        owned.sort_by(|a, b| {
            b.transaction
                .date
                .cmp(&a.transaction.date)
                .then(b.created_at.cmp(&a.created_at))
        });

        Ok(owned.into_iter().map(|r| r.transaction.clone()).collect())
    }

    fn create(&self, user_id: &str, draft: TransactionDraft) -> FinanceResult<Transaction> {
        let transaction = draft.into_transaction();
        transaction
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let mut records = self.records.write().map_err(lock_error)?;
        records.push(TransactionRecord {
            transaction: transaction.clone(),
            created_by: user_id.to_string(),
            created_at: Utc::now(),
        });
        self.persist(&records)?;

        info!(id = %transaction.id, user = user_id, "transaction created");
        Ok(transaction)
    }

    fn update(&self, transaction: &Transaction) -> FinanceResult<Transaction> {
        transaction
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let mut records = self.records.write().map_err(lock_error)?;
        let record = records
            .iter_mut()
            .find(|r| r.transaction.id == transaction.id)
            .ok_or_else(|| FinanceError::transaction_not_found(transaction.id.to_string()))?;
        record.transaction = transaction.clone();
        self.persist(&records)?;

        info!(id = %transaction.id, "transaction updated");
        Ok(transaction.clone())
    }

    fn delete(&self, id: TransactionId) -> FinanceResult<()> {
        let mut records = self.records.write().map_err(lock_error)?;
        let before = records.len();
        records.retain(|r| r.transaction.id != id);
        if records.len() == before {
            return Err(FinanceError::transaction_not_found(id.to_string()));
        }
        self.persist(&records)?;

        info!(id = %id, "transaction deleted");
        Ok(())
    }
}
