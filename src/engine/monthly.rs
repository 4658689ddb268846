//! Monthly income/expense time series
//!
//! Buckets transactions by calendar month (UTC) for the overview chart.

use chrono::{Datelike, NaiveDate};

use crate::models::{Money, Transaction};

/// Number of months shown by default
pub const DEFAULT_SERIES_MONTHS: usize = 6;

const MONTH_LABELS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    /// Short month name
    pub label: &'static str,
    pub income: Money,
    pub expenses: Money,
}

impl MonthBucket {
    fn new(index: i64) -> Self {
        let year = index.div_euclid(12) as i32;
        let month0 = index.rem_euclid(12) as usize;
        Self {
            year,
            month: month0 as u32 + 1,
            label: MONTH_LABELS[month0],
            income: Money::zero(),
            expenses: Money::zero(),
        }
    }

    /// Income minus expenses for the month
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

fn month_index(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month) - 1
}

/// Build `month_count` consecutive monthly buckets ending with the month of
/// `reference`, oldest first.
///
/// Every transaction lands in at most one bucket, matched on calendar year
/// and month. Months without transactions stay at zero, so the result always
/// has exactly `month_count` entries.
pub fn monthly_series(
    transactions: &[Transaction],
    reference: NaiveDate,
    month_count: usize,
) -> Vec<MonthBucket> {
    let last = month_index(reference.year(), reference.month());
    let first = last - month_count as i64 + 1;

    let mut buckets: Vec<MonthBucket> = (first..=last).map(MonthBucket::new).collect();

    for txn in transactions {
        let day = txn.day();
        let index = month_index(day.year(), day.month());
        if index < first || index > last {
            continue;
        }

        let bucket = &mut buckets[(index - first) as usize];
        if txn.is_expense {
            bucket.expenses += txn.amount;
        } else {
            bucket.income += txn.amount;
        }
    }

    buckets
}
