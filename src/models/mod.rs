//! Core data models for kwanza-cli
//!
//! Transactions, budgets, savings goals and debts, plus the value types they
//! share. All records are plain values: updates replace a whole record keyed
//! by its id.

pub mod budget;
pub mod category;
pub mod debt;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::{Category, CategoryParseError};
pub use debt::{Debt, DebtValidationError};
pub use goal::{Goal, GoalValidationError};
pub use ids::{BudgetId, DebtId, GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::BudgetPeriod;
pub use transaction::{Transaction, TransactionValidationError};
