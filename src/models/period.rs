//! Budget period representation
//!
//! A budget period names the recurrence window its ceiling applies to. The
//! window containing a reference date is the calendar month for monthly
//! budgets and the ISO week (Monday through Sunday) for weekly budgets.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recurrence window of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Weekly,
}

impl BudgetPeriod {
    /// First day of the window containing `reference`
    pub fn start_date(&self, reference: NaiveDate) -> NaiveDate {
        match self {
            Self::Monthly => reference.with_day(1).unwrap_or(reference),
            Self::Weekly => {
                let iso = reference.iso_week();
                NaiveDate::from_isoywd_opt(iso.year(), iso.week(), Weekday::Mon)
                    .unwrap_or(reference)
            }
        }
    }

    /// Last day (inclusive) of the window containing `reference`
    pub fn end_date(&self, reference: NaiveDate) -> NaiveDate {
        match self {
            Self::Monthly => {
                let start = self.start_date(reference);
                let next_month = if start.month() == 12 {
                    NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
                };
                next_month
                    .map(|d| d - Duration::days(1))
                    .unwrap_or(reference)
            }
            Self::Weekly => self.start_date(reference) + Duration::days(6),
        }
    }

    /// Check if `date` falls in the same window as `reference`
    pub fn contains(&self, reference: NaiveDate, date: NaiveDate) -> bool {
        date >= self.start_date(reference) && date <= self.end_date(reference)
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Weekly => write!(f, "weekly"),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" | "mensal" => Ok(Self::Monthly),
            "weekly" | "week" | "semanal" => Ok(Self::Weekly),
            _ => Err(PeriodParseError::InvalidFormat(s.to_string())),
        }
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => {
                write!(f, "Invalid period: {} (use monthly or weekly)", s)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_window() {
        let p = BudgetPeriod::Monthly;
        assert_eq!(p.start_date(date(2025, 2, 14)), date(2025, 2, 1));
        assert_eq!(p.end_date(date(2025, 2, 14)), date(2025, 2, 28));
        assert_eq!(p.end_date(date(2024, 12, 3)), date(2024, 12, 31));
    }

    #[test]
    fn test_weekly_window() {
        let p = BudgetPeriod::Weekly;
        // Wednesday 2025-01-15 sits in the week of Monday 2025-01-13
        assert_eq!(p.start_date(date(2025, 1, 15)), date(2025, 1, 13));
        assert_eq!(p.end_date(date(2025, 1, 15)), date(2025, 1, 19));
        // ISO week 1 of 2025 starts on Monday December 30, 2024
        assert_eq!(p.start_date(date(2025, 1, 1)), date(2024, 12, 30));
    }

    #[test]
    fn test_contains() {
        let reference = date(2025, 1, 15);
        assert!(BudgetPeriod::Monthly.contains(reference, date(2025, 1, 31)));
        assert!(!BudgetPeriod::Monthly.contains(reference, date(2025, 2, 1)));
        assert!(BudgetPeriod::Weekly.contains(reference, date(2025, 1, 19)));
        assert!(!BudgetPeriod::Weekly.contains(reference, date(2025, 1, 20)));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("weekly".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Weekly);
        assert_eq!("Mensal".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Monthly);
        assert!("yearly".parse::<BudgetPeriod>().is_err());
        assert_eq!(BudgetPeriod::Weekly.to_string(), "weekly");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&BudgetPeriod::Monthly).unwrap();
        assert_eq!(json, "\"monthly\"");
    }
}
