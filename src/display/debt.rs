//! Debt and loan display formatting

use crate::engine::{
    total_debt, total_minimum_payments, CurrencyFormat, DebtStrategy, LoanSummary,
};
use crate::models::Debt;

use super::report::{separator, truncate};

/// Debts as a table in the order given, with totals
pub fn format_debt_list(debts: &[Debt], currency: &CurrencyFormat) -> String {
    if debts.is_empty() {
        return "No debts recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:<24} {:>16} {:>7} {:>14} {:>9}\n",
        "ID", "Name", "Balance", "Rate", "Minimum", "Payments"
    ));
    output.push_str(&separator(87));
    output.push('\n');

    for debt in debts {
        output.push_str(&format!(
            "{:12} {:<24} {:>16} {:>6.1}% {:>14} {:>9}\n",
            debt.id.to_string(),
            truncate(&debt.name, 24),
            debt.amount.format_with(currency),
            debt.interest_rate,
            debt.minimum_payment.format_with(currency),
            debt.remaining_payments
        ));
    }

    output.push_str(&separator(87));
    output.push('\n');
    output.push_str(&format!(
        "Total debt: {}   Monthly minimums: {}\n",
        total_debt(debts).format_with(currency),
        total_minimum_payments(debts).format_with(currency)
    ));

    output
}

/// Payoff order for a strategy, numbered from first to last
pub fn format_strategy(
    strategy: DebtStrategy,
    debts: &[Debt],
    currency: &CurrencyFormat,
) -> String {
    let heading = match strategy {
        DebtStrategy::Avalanche => "Avalanche: highest interest rate first",
        DebtStrategy::Snowball => "Snowball: smallest balance first",
    };

    let mut output = format!("{}\n", heading);
    for (position, debt) in strategy.order(debts).iter().enumerate() {
        output.push_str(&format!(
            "  {}. {} ({}, {:.1}%)\n",
            position + 1,
            debt.name,
            debt.amount.format_with(currency),
            debt.interest_rate
        ));
    }
    output
}

/// Loan calculator result, optionally followed by the full schedule
pub fn format_loan_summary(
    loan: &LoanSummary,
    with_schedule: bool,
    currency: &CurrencyFormat,
) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Principal:       {}\n",
        loan.principal.format_with(currency)
    ));
    output.push_str(&format!("Annual rate:     {}%\n", loan.annual_rate));
    output.push_str(&format!("Term:            {} months\n", loan.term_months));
    output.push_str(&format!(
        "Monthly payment: {}\n",
        loan.monthly_payment.format_with(currency)
    ));
    output.push_str(&format!(
        "Total paid:      {}\n",
        loan.total_payment.format_with(currency)
    ));
    output.push_str(&format!(
        "Total interest:  {}\n",
        loan.total_interest.format_with(currency)
    ));

    if with_schedule {
        output.push('\n');
        output.push_str(&format!(
            "{:>5} {:>16} {:>16} {:>16} {:>16}\n",
            "Month", "Payment", "Principal", "Interest", "Balance"
        ));
        output.push_str(&separator(73));
        output.push('\n');
        for row in loan.schedule() {
            output.push_str(&format!(
                "{:>5} {:>16} {:>16} {:>16} {:>16}\n",
                row.month,
                row.payment.format_with(currency),
                row.principal.format_with(currency),
                row.interest.format_with(currency),
                row.balance.format_with(currency)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::amortize;
    use crate::models::Money;

    fn debts() -> Vec<Debt> {
        vec![
            Debt::new("Cartão", Money::new(80000.0), 24.0, Money::new(10000.0), 8),
            Debt::new("Carro", Money::new(900000.0), 12.0, Money::new(30000.0), 30),
        ]
    }

    #[test]
    fn test_debt_list_totals() {
        let output = format_debt_list(&debts(), &CurrencyFormat::default());
        assert!(output.contains("Cartão"));
        assert!(output.contains("Total debt: 980 000 Kz"));
        assert!(output.contains("Monthly minimums: 40 000 Kz"));
    }

    #[test]
    fn test_strategy_order() {
        let output = format_strategy(
            DebtStrategy::Snowball,
            &debts(),
            &CurrencyFormat::default(),
        );
        let cartao = output.find("1. Cartão").unwrap();
        let carro = output.find("2. Carro").unwrap();
        assert!(cartao < carro);
    }

    #[test]
    fn test_loan_summary() {
        let loan = amortize(120000.0, 0.0, 12).unwrap();
        let output = format_loan_summary(&loan, true, &CurrencyFormat::default());
        assert!(output.contains("Monthly payment: 10 000 Kz"));
        assert!(output.contains("Total interest:  0 Kz"));
        let last_month = output
            .lines()
            .filter(|l| l.trim_start().starts_with("12 "))
            .count();
        assert_eq!(last_month, 1);
    }
}
