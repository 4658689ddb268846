//! Application state and its transition function
//!
//! [`FinanceState`] holds the four collections a session works with. It is
//! built by the caller (usually from storage), threaded explicitly through
//! the CLI handlers, and changed only through [`reduce`], which returns a new
//! value and leaves its input untouched.

pub mod action;

pub use action::FinanceAction;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Budget, Category, Debt, Goal, Transaction};

/// Snapshot of every record a user owns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceState {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub debts: Vec<Debt>,
}

impl FinanceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a transaction by full id or short id prefix
    pub fn find_transaction(&self, key: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id.matches_key(key))
    }

    /// Look up a budget by id prefix or by its category
    pub fn find_budget(&self, key: &str) -> Option<&Budget> {
        if let Some(budget) = self.budgets.iter().find(|b| b.id.matches_key(key)) {
            return Some(budget);
        }
        let category: Category = key.parse().ok()?;
        self.budgets.iter().find(|b| b.category == category)
    }

    /// Look up a goal by id prefix or case-insensitive name
    pub fn find_goal(&self, key: &str) -> Option<&Goal> {
        self.goals
            .iter()
            .find(|g| g.id.matches_key(key))
            .or_else(|| self.goals.iter().find(|g| g.name.eq_ignore_ascii_case(key)))
    }

    /// Look up a debt by id prefix or case-insensitive name
    pub fn find_debt(&self, key: &str) -> Option<&Debt> {
        self.debts
            .iter()
            .find(|d| d.id.matches_key(key))
            .or_else(|| self.debts.iter().find(|d| d.name.eq_ignore_ascii_case(key)))
    }

    /// Number of records across all collections
    pub fn record_count(&self) -> usize {
        self.transactions.len() + self.budgets.len() + self.goals.len() + self.debts.len()
    }
}

/// Apply `action` to `state`, producing the next state.
///
/// New transactions go to the front so the list stays newest first; other
/// additions are appended. Updates replace the record with the same id and
/// are a no-op when no such record exists. Deletes remove by id.
pub fn reduce(state: &FinanceState, action: FinanceAction) -> FinanceState {
    debug!(action = action.name(), "reducing finance state");

    let mut next = state.clone();
    match action {
        FinanceAction::SetTransactions(transactions) => next.transactions = transactions,
        FinanceAction::AddTransaction(txn) => next.transactions.insert(0, txn),
        FinanceAction::UpdateTransaction(txn) => replace_by(&mut next.transactions, txn, |t| t.id),
        FinanceAction::DeleteTransaction(id) => next.transactions.retain(|t| t.id != id),

        FinanceAction::SetBudgets(budgets) => next.budgets = budgets,
        FinanceAction::AddBudget(budget) => next.budgets.push(budget),
        FinanceAction::UpdateBudget(budget) => replace_by(&mut next.budgets, budget, |b| b.id),
        FinanceAction::DeleteBudget(id) => next.budgets.retain(|b| b.id != id),

        FinanceAction::SetGoals(goals) => next.goals = goals,
        FinanceAction::AddGoal(goal) => next.goals.push(goal),
        FinanceAction::UpdateGoal(goal) => replace_by(&mut next.goals, goal, |g| g.id),
        FinanceAction::DeleteGoal(id) => next.goals.retain(|g| g.id != id),

        FinanceAction::SetDebts(debts) => next.debts = debts,
        FinanceAction::AddDebt(debt) => next.debts.push(debt),
        FinanceAction::UpdateDebt(debt) => replace_by(&mut next.debts, debt, |d| d.id),
        FinanceAction::DeleteDebt(id) => next.debts.retain(|d| d.id != id),
    }
    next
}

fn replace_by<T, K, F>(items: &mut [T], replacement: T, key: F)
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let wanted = key(&replacement);
    if let Some(slot) = items.iter_mut().find(|item| key(&**item) == wanted) {
        *slot = replacement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{expense, income};
    use crate::models::ids::TransactionId;
    use crate::models::{BudgetPeriod, Money};
    use chrono::NaiveDate;

    fn goal(name: &str) -> Goal {
        Goal::new(
            name,
            Money::new(100000.0),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_add_transaction_prepends() {
        let first = income(1000.0, 2025, 1, 1);
        let second = expense(50.0, Category::Food, 2025, 1, 2);

        let state = reduce(&FinanceState::new(), FinanceAction::AddTransaction(first.clone()));
        let state = reduce(&state, FinanceAction::AddTransaction(second.clone()));

        assert_eq!(state.transactions, vec![second, first]);
    }

    #[test]
    fn test_other_adds_append() {
        let state = reduce(&FinanceState::new(), FinanceAction::AddGoal(goal("Carro")));
        let state = reduce(&state, FinanceAction::AddGoal(goal("Casa")));

        let names: Vec<_> = state.goals.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Carro", "Casa"]);
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let state = FinanceState::new();
        let next = reduce(&state, FinanceAction::AddGoal(goal("Carro")));

        assert!(state.goals.is_empty());
        assert_eq!(next.goals.len(), 1);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let budget = Budget::new(Category::Food, Money::new(50000.0), BudgetPeriod::Monthly);
        let state = reduce(&FinanceState::new(), FinanceAction::AddBudget(budget.clone()));

        let mut edited = budget.clone();
        edited.amount = Money::new(60000.0);
        let state = reduce(&state, FinanceAction::UpdateBudget(edited));

        assert_eq!(state.budgets.len(), 1);
        assert_eq!(state.budgets[0].amount.value(), 60000.0);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let txn = income(1000.0, 2025, 1, 1);
        let state = reduce(&FinanceState::new(), FinanceAction::AddTransaction(txn));

        let stranger = income(5.0, 2025, 2, 1);
        let next = reduce(&state, FinanceAction::UpdateTransaction(stranger));

        assert_eq!(next, state);
    }

    #[test]
    fn test_delete_removes_by_id() {
        let keep = income(1000.0, 2025, 1, 1);
        let drop = expense(50.0, Category::Food, 2025, 1, 2);
        let state = reduce(
            &FinanceState::new(),
            FinanceAction::SetTransactions(vec![keep.clone(), drop.clone()]),
        );

        let state = reduce(&state, FinanceAction::DeleteTransaction(drop.id));
        assert_eq!(state.transactions, vec![keep]);

        let unchanged = reduce(&state, FinanceAction::DeleteTransaction(TransactionId::new()));
        assert_eq!(unchanged, state);
    }

    #[test]
    fn test_find_by_name_and_prefix() {
        let car = goal("Carro");
        let state = reduce(&FinanceState::new(), FinanceAction::AddGoal(car.clone()));

        assert_eq!(state.find_goal("carro").map(|g| g.id), Some(car.id));
        let prefix = car.id.as_uuid().to_string()[..8].to_string();
        assert_eq!(state.find_goal(&prefix).map(|g| g.id), Some(car.id));
        assert!(state.find_goal("casa").is_none());
    }

    #[test]
    fn test_find_budget_by_category() {
        let budget = Budget::new(Category::Food, Money::new(50000.0), BudgetPeriod::Monthly);
        let state = reduce(&FinanceState::new(), FinanceAction::AddBudget(budget.clone()));

        assert_eq!(state.find_budget("food").map(|b| b.id), Some(budget.id));
        assert_eq!(state.find_budget("Alimentação").map(|b| b.id), Some(budget.id));
        assert!(state.find_budget("housing").is_none());
    }
}
