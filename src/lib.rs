//! kwanza-cli - terminal personal-finance tracker
//!
//! Records income and expense transactions, category budgets, savings goals
//! and debts, and derives totals, spending breakdowns, budget utilization,
//! goal pacing, debt payoff order and loan amortization from them.
//!
//! # Architecture
//!
//! - `models`: Core data types (transactions, budgets, goals, debts, money)
//! - `engine`: Pure aggregation and calculation functions
//! - `state`: In-memory finance state and its reducer
//! - `storage`: JSON file storage and the transaction backend
//! - `config`: Paths and settings
//! - `audit`: Append-only audit log
//! - `reports`, `display`: Terminal rendering
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use kwanza_cli::engine::{balance, total_expenses};
//! use kwanza_cli::models::{Category, Money, Transaction};
//! use chrono::Utc;
//!
//! let txns = vec![
//!     Transaction::income("Salário", Money::new(50000.0), Utc::now()),
//!     Transaction::expense("Mercado", Money::new(12000.0), Category::Food, Utc::now()),
//! ];
//! assert_eq!(total_expenses(&txns).value(), 12000.0);
//! assert_eq!(balance(&txns).value(), 38000.0);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod state;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
