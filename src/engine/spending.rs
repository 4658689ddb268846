//! Spending grouped by category

use std::collections::HashMap;

use crate::models::{Category, Money, Transaction};

use super::percent;

/// Total expense amount for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySpending {
    pub category: Category,
    pub total: Money,
    /// Number of expense transactions contributing to `total`
    pub count: usize,
}

/// Expense totals keyed by category.
///
/// Only categories with at least one expense transaction appear. Entries
/// keep the order in which their category was first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpendingByCategory {
    entries: Vec<CategorySpending>,
}

impl SpendingByCategory {
    /// Total for one category, if it has any expenses
    pub fn get(&self, category: Category) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.total)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &CategorySpending> {
        self.entries.iter()
    }

    /// Sum across all categories
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.total).sum()
    }

    /// Share of total spending for one category, in percent
    pub fn share(&self, category: Category) -> f64 {
        let part = self.get(category).unwrap_or_default();
        percent(part.value(), self.total().value())
    }

    /// Entries sorted by amount, largest first.
    ///
    /// Equal amounts keep their first-seen order.
    pub fn sorted_desc(&self) -> Vec<CategorySpending> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.total.total_cmp(&a.total));
        sorted
    }

    /// Plain map view
    pub fn to_map(&self) -> HashMap<Category, Money> {
        self.entries.iter().map(|e| (e.category, e.total)).collect()
    }
}

/// Group expense transactions by category and sum their amounts
pub fn spending_by_category(transactions: &[Transaction]) -> SpendingByCategory {
    let mut index: HashMap<Category, usize> = HashMap::new();
    let mut entries: Vec<CategorySpending> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense) {
        match index.get(&txn.category) {
            Some(&i) => {
                entries[i].total += txn.amount;
                entries[i].count += 1;
            }
            None => {
                index.insert(txn.category, entries.len());
                entries.push(CategorySpending {
                    category: txn.category,
                    total: txn.amount,
                    count: 1,
                });
            }
        }
    }

    SpendingByCategory { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{assert_close, expense, income};
    use crate::engine::totals::total_expenses;

    #[test]
    fn test_single_food_expense() {
        let txns = vec![
            income(250000.0, 2025, 3, 1),
            expense(40000.0, Category::Food, 2025, 3, 2),
        ];
        let spending = spending_by_category(&txns);

        assert_eq!(spending.len(), 1);
        assert_eq!(spending.get(Category::Food), Some(Money::new(40000.0)));
        assert_eq!(spending.get(Category::Income), None);
    }

    #[test]
    fn test_groups_and_sums() {
        let txns = vec![
            expense(100.0, Category::Food, 2025, 1, 1),
            expense(300.0, Category::Housing, 2025, 1, 2),
            expense(50.0, Category::Food, 2025, 1, 3),
            income(999.0, 2025, 1, 4),
        ];
        let spending = spending_by_category(&txns);

        assert_eq!(spending.get(Category::Food), Some(Money::new(150.0)));
        assert_eq!(spending.get(Category::Housing), Some(Money::new(300.0)));
        assert_eq!(spending.total(), total_expenses(&txns));
        assert_eq!(spending.iter().find(|e| e.category == Category::Food).unwrap().count, 2);
    }

    #[test]
    fn test_sorted_desc_is_stable_for_ties() {
        let txns = vec![
            expense(100.0, Category::Shopping, 2025, 1, 1),
            expense(300.0, Category::Housing, 2025, 1, 2),
            expense(100.0, Category::Food, 2025, 1, 3),
        ];
        let order: Vec<Category> = spending_by_category(&txns)
            .sorted_desc()
            .into_iter()
            .map(|e| e.category)
            .collect();

        assert_eq!(
            order,
            vec![Category::Housing, Category::Shopping, Category::Food]
        );
    }

    #[test]
    fn test_share() {
        let txns = vec![
            expense(250.0, Category::Food, 2025, 1, 1),
            expense(750.0, Category::Housing, 2025, 1, 2),
        ];
        let spending = spending_by_category(&txns);
        assert_close(spending.share(Category::Food), 25.0);
        assert_eq!(spending.share(Category::Debt), 0.0);
        assert_eq!(SpendingByCategory::default().share(Category::Food), 0.0);
    }

    #[test]
    fn test_no_expenses_is_empty() {
        let spending = spending_by_category(&[income(10.0, 2025, 1, 1)]);
        assert!(spending.is_empty());
        assert!(spending.to_map().is_empty());
    }
}
