//! Display formatting for terminal output

pub mod debt;
pub mod goal;
pub mod report;
pub mod transaction;

pub use debt::{format_debt_list, format_loan_summary, format_strategy};
pub use goal::format_goal_list;
pub use transaction::{
    format_transaction_details, format_transaction_register, format_transaction_row,
};
