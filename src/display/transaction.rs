//! Transaction display formatting

use crate::engine::CurrencyFormat;
use crate::models::{Money, Transaction};

use super::report::truncate;

/// One register row: date, id, category, description, signed amount
pub fn format_transaction_row(txn: &Transaction, currency: &CurrencyFormat) -> String {
    let marker = if txn.is_expense { "-" } else { "+" };
    format!(
        "{} {} {:<14} {:<24} {}{:>14}",
        txn.date.format("%Y-%m-%d"),
        txn.id,
        truncate(txn.category.label(), 14),
        truncate(&txn.description, 24),
        marker,
        txn.amount.format_with(currency)
    )
}

/// Transactions as a register table with a net total line
pub fn format_transaction_register(
    transactions: &[Transaction],
    currency: &CurrencyFormat,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:12} {:<14} {:<24} {:>15}\n",
        "Date", "ID", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(79));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency));
        output.push('\n');
    }

    let net: Money = transactions.iter().map(|t| t.signed_amount()).sum();
    output.push_str(&"-".repeat(79));
    output.push('\n');
    output.push_str(&format!(
        "{} transaction(s), net {}\n",
        transactions.len(),
        net.format_with(currency)
    ));

    output
}

/// Multi-line detail view of a single transaction
pub fn format_transaction_details(txn: &Transaction, currency: &CurrencyFormat) -> String {
    let kind = if txn.is_expense { "Expense" } else { "Income" };

    let mut output = String::new();
    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d %H:%M UTC")));
    output.push_str(&format!("Type:        {}\n", kind));
    output.push_str(&format!("Category:    {}\n", txn.category.label()));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with(currency)));
    output
}
