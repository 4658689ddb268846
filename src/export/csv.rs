//! CSV export of transactions

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;

const HEADER: [&str; 7] = [
    "ID",
    "Date",
    "Type",
    "Category",
    "Description",
    "Amount",
    "Signed Amount",
];

fn export_error<E: std::fmt::Display>(e: E) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Write `transactions` as CSV, in the order given.
///
/// Returns the number of data rows written.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinanceResult<usize> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(HEADER).map_err(export_error)?;

    for txn in transactions {
        let kind = if txn.is_expense { "expense" } else { "income" };
        csv.write_record([
            txn.id.as_uuid().to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            kind.to_string(),
            txn.category.label().to_string(),
            txn.description.clone(),
            format!("{:.2}", txn.amount.value()),
            format!("{:.2}", txn.signed_amount().value()),
        ])
        .map_err(export_error)?;
    }

    csv.flush().map_err(export_error)?;
    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::at;
    use crate::models::{Category, Money};

    #[test]
    fn test_export_transactions() {
        let txns = vec![
            Transaction::expense(
                "Renda, março",
                Money::new(120000.0),
                Category::Housing,
                at(2025, 3, 1),
            ),
            Transaction::income("Salário", Money::new(350000.0), at(2025, 3, 1)),
        ];

        let mut output = Vec::new();
        let rows = export_transactions_csv(&txns, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(rows, 2);
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "ID,Date,Type,Category,Description,Amount,Signed Amount"
        );
        // Embedded comma is quoted
        assert!(lines[1].contains("\"Renda, março\""));
        assert!(lines[1].contains("expense,Habitação"));
        assert!(lines[1].ends_with("120000.00,-120000.00"));
        assert!(lines[2].contains("income,Receita,Salário,350000.00,350000.00"));
    }

    #[test]
    fn test_export_empty() {
        let mut output = Vec::new();
        assert_eq!(export_transactions_csv(&[], &mut output).unwrap(), 0);
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }
}
