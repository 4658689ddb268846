//! State transitions understood by [`reduce`](super::reduce)

use crate::models::ids::{BudgetId, DebtId, GoalId, TransactionId};
use crate::models::{Budget, Debt, Goal, Transaction};

/// A discrete change to [`FinanceState`](super::FinanceState)
#[derive(Debug, Clone, PartialEq)]
pub enum FinanceAction {
    SetTransactions(Vec<Transaction>),
    AddTransaction(Transaction),
    UpdateTransaction(Transaction),
    DeleteTransaction(TransactionId),

    SetBudgets(Vec<Budget>),
    AddBudget(Budget),
    UpdateBudget(Budget),
    DeleteBudget(BudgetId),

    SetGoals(Vec<Goal>),
    AddGoal(Goal),
    UpdateGoal(Goal),
    DeleteGoal(GoalId),

    SetDebts(Vec<Debt>),
    AddDebt(Debt),
    UpdateDebt(Debt),
    DeleteDebt(DebtId),
}

impl FinanceAction {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetTransactions(_) => "set_transactions",
            Self::AddTransaction(_) => "add_transaction",
            Self::UpdateTransaction(_) => "update_transaction",
            Self::DeleteTransaction(_) => "delete_transaction",
            Self::SetBudgets(_) => "set_budgets",
            Self::AddBudget(_) => "add_budget",
            Self::UpdateBudget(_) => "update_budget",
            Self::DeleteBudget(_) => "delete_budget",
            Self::SetGoals(_) => "set_goals",
            Self::AddGoal(_) => "add_goal",
            Self::UpdateGoal(_) => "update_goal",
            Self::DeleteGoal(_) => "delete_goal",
            Self::SetDebts(_) => "set_debts",
            Self::AddDebt(_) => "add_debt",
            Self::UpdateDebt(_) => "update_debt",
            Self::DeleteDebt(_) => "delete_debt",
        }
    }
}
