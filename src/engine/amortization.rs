//! Fixed-payment loan calculator

use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;

/// Longest loan term accepted, in months (100 years)
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Result of an amortization calculation
#[derive(Debug, Clone, PartialEq)]
pub struct LoanSummary {
    pub principal: Money,
    /// Annual rate in percent
    pub annual_rate: f64,
    pub term_months: u32,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

/// One month of an amortization schedule
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationRow {
    /// 1-based month number
    pub month: u32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    /// Outstanding balance after this payment
    pub balance: Money,
}

impl LoanSummary {
    fn monthly_rate(&self) -> f64 {
        self.annual_rate / 100.0 / 12.0
    }

    /// Month-by-month split of each payment into interest and principal.
    ///
    /// The final row absorbs rounding drift so the balance ends at zero.
    pub fn schedule(&self) -> Vec<AmortizationRow> {
        let rate = self.monthly_rate();
        let mut balance = self.principal.value();
        let mut rows = Vec::with_capacity(self.term_months as usize);

        for month in 1..=self.term_months {
            let interest = balance * rate;
            let mut principal = self.monthly_payment.value() - interest;
            if month == self.term_months {
                principal = balance;
            }
            balance = (balance - principal).max(0.0);

            rows.push(AmortizationRow {
                month,
                payment: Money::new(principal + interest),
                principal: Money::new(principal),
                interest: Money::new(interest),
                balance: Money::new(balance),
            });
        }

        rows
    }
}

/// Monthly payment, total paid and total interest for a fixed-rate loan.
///
/// Uses the annuity formula `P·r / (1 − (1+r)^−n)` with
/// `r = annual_rate_percent / 100 / 12`, evaluated through `ln_1p` and
/// `exp_m1` so tiny rates do not collapse to a division by zero. A zero rate
/// pays `P / n` per month. Terms above [`MAX_TERM_MONTHS`] are rejected.
pub fn amortize(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> FinanceResult<LoanSummary> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(FinanceError::InvalidInput(format!(
            "principal must be a positive number, got {}",
            principal
        )));
    }

    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(FinanceError::InvalidInput(format!(
            "interest rate must be zero or positive, got {}",
            annual_rate_percent
        )));
    }

    if term_months < 1 {
        return Err(FinanceError::InvalidInput(
            "term must be at least one month".into(),
        ));
    }

    if term_months > MAX_TERM_MONTHS {
        return Err(FinanceError::InvalidInput(format!(
            "term must be at most {} months, got {}",
            MAX_TERM_MONTHS, term_months
        )));
    }

    let rate = annual_rate_percent / 100.0 / 12.0;
    let n = f64::from(term_months);

    let monthly_payment = if rate == 0.0 {
        principal / n
    } else {
        let exponent = n * rate.ln_1p();
        principal * rate / -(-exponent).exp_m1()
    };

    if !monthly_payment.is_finite() {
        return Err(FinanceError::InvalidInput(format!(
            "no finite payment for {} at {}% over {} months",
            principal, annual_rate_percent, term_months
        )));
    }

    let total_payment = monthly_payment * n;

    Ok(LoanSummary {
        principal: Money::new(principal),
        annual_rate: annual_rate_percent,
        term_months,
        monthly_payment: Money::new(monthly_payment),
        total_payment: Money::new(total_payment),
        total_interest: Money::new(total_payment - principal),
    })
}
