//! Transaction listing: search, filter, sort and "recent" views

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::{Category, Transaction};

/// Which direction of money a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    All,
    Income,
    Expense,
}

impl TransactionKind {
    fn accepts(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Income => !txn.is_expense,
            Self::Expense => txn.is_expense,
        }
    }
}

/// Field a listing is sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Date,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Sort key and direction; defaults to newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl TransactionSort {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        let ord = match self.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Amount => a.amount.total_cmp(&b.amount),
        };
        match self.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

/// Criteria for narrowing a transaction list.
///
/// An empty filter accepts everything.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive text matched against description and category
    pub search: Option<String>,
    pub category: Option<Category>,
    pub kind: TransactionKind,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether `txn` passes every criterion
    pub fn matches(&self, txn: &Transaction) -> bool {
        if !self.kind.accepts(txn) {
            return false;
        }

        if let Some(category) = self.category {
            if txn.category != category {
                return false;
            }
        }

        if let Some(ref term) = self.search {
            let term = term.trim().to_lowercase();
            let in_description = txn.description.to_lowercase().contains(&term);
            let in_category = txn.category.key().contains(&term)
                || txn.category.label().to_lowercase().contains(&term);
            if !in_description && !in_category {
                return false;
            }
        }

        true
    }
}

/// Transactions passing `filter`, ordered by `sort`. Ties keep input order.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
    sort: TransactionSort,
) -> Vec<Transaction> {
    let mut result: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    result.sort_by(|a, b| sort.compare(a, b));
    result
}

/// The `limit` most recent transactions, newest first
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut result = transactions.to_vec();
    result.sort_by(|a, b| b.date.cmp(&a.date));
    result.truncate(limit);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{at, expense, income};
    use crate::models::Money;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::expense(
                "Supermercado Kero",
                Money::new(15000.0),
                Category::Food,
                at(2025, 3, 2),
            ),
            Transaction::income("Salário", Money::new(250000.0), at(2025, 3, 1)),
            Transaction::expense(
                "Táxi",
                Money::new(2000.0),
                Category::Transportation,
                at(2025, 3, 5),
            ),
            Transaction::expense(
                "Jantar fora",
                Money::new(8000.0),
                Category::Food,
                at(2025, 2, 20),
            ),
        ]
    }

    fn descriptions(txns: &[Transaction]) -> Vec<&str> {
        txns.iter().map(|t| t.description.as_str()).collect()
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let result = filter_transactions(
            &sample(),
            &TransactionFilter::new(),
            TransactionSort::default(),
        );
        assert_eq!(
            descriptions(&result),
            vec!["Táxi", "Supermercado Kero", "Salário", "Jantar fora"]
        );
    }

    #[test]
    fn test_sort_by_amount_ascending() {
        let result = filter_transactions(
            &sample(),
            &TransactionFilter::new(),
            TransactionSort::new(SortField::Amount, SortOrder::Asc),
        );
        let amounts: Vec<f64> = result.iter().map(|t| t.amount.value()).collect();
        assert_eq!(amounts, vec![2000.0, 8000.0, 15000.0, 250000.0]);
    }

    #[test]
    fn test_filter_by_kind() {
        let txns = sample();
        let incomes = filter_transactions(
            &txns,
            &TransactionFilter::new().kind(TransactionKind::Income),
            TransactionSort::default(),
        );
        assert_eq!(descriptions(&incomes), vec!["Salário"]);

        let expenses = filter_transactions(
            &txns,
            &TransactionFilter::new().kind(TransactionKind::Expense),
            TransactionSort::default(),
        );
        assert_eq!(expenses.len(), 3);
        assert!(expenses.iter().all(|t| t.is_expense));
    }

    #[test]
    fn test_search_matches_description_and_category_label() {
        let txns = sample();

        let by_description = filter_transactions(
            &txns,
            &TransactionFilter::new().search("KERO"),
            TransactionSort::default(),
        );
        assert_eq!(descriptions(&by_description), vec!["Supermercado Kero"]);

        let by_label = filter_transactions(
            &txns,
            &TransactionFilter::new().search("alimenta"),
            TransactionSort::default(),
        );
        assert_eq!(by_label.len(), 2);
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let filter = TransactionFilter::new().search("   ");
        assert!(filter.search.is_none());
        assert_eq!(
            filter_transactions(&sample(), &filter, TransactionSort::default()).len(),
            4
        );
    }

    #[test]
    fn test_filter_by_category() {
        let result = filter_transactions(
            &sample(),
            &TransactionFilter::new().category(Category::Transportation),
            TransactionSort::default(),
        );
        assert_eq!(descriptions(&result), vec!["Táxi"]);
    }

    #[test]
    fn test_recent_transactions() {
        let txns = vec![
            income(100.0, 2025, 1, 1),
            expense(10.0, Category::Food, 2025, 1, 5),
            expense(20.0, Category::Food, 2025, 1, 3),
        ];
        let recent = recent_transactions(&txns, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].amount.value(), 10.0);
        assert_eq!(recent[1].amount.value(), 20.0);

        assert_eq!(recent_transactions(&txns, 10).len(), 3);
        assert!(recent_transactions(&[], 5).is_empty());
    }
}
