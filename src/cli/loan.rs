//! Loan calculator command

use clap::Args;

use super::{parse_amount, Session};
use crate::display::debt::format_loan_summary;
use crate::engine::amortize;
use crate::error::FinanceResult;

#[derive(Args)]
pub struct LoanArgs {
    /// Amount borrowed
    pub principal: String,
    /// Annual interest rate in percent
    pub rate: f64,
    /// Term in months
    pub months: u32,
    /// Print the month-by-month schedule
    #[arg(short, long)]
    pub schedule: bool,
}

pub fn handle_loan_command(session: &Session, args: LoanArgs) -> FinanceResult<()> {
    let principal = parse_amount(&args.principal)?;
    let loan = amortize(principal.value(), args.rate, args.months)?;
    print!(
        "{}",
        format_loan_summary(&loan, args.schedule, session.currency())
    );
    Ok(())
}
