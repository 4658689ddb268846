//! Savings goal progress and pacing

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Goal, Money};

use super::percent;

const SECONDS_PER_DAY: i64 = 86_400;

/// Saved amount as a percentage of the target
pub fn goal_progress(goal: &Goal) -> f64 {
    percent(goal.current_amount.value(), goal.target_amount.value())
}

pub fn is_completed(goal: &Goal) -> bool {
    goal_progress(goal) >= 100.0
}

/// Whole days from `now` until the start of the target date (UTC), rounded
/// up. Negative once the target date has passed.
pub fn days_remaining(goal: &Goal, now: DateTime<Utc>) -> i64 {
    let target = goal.target_date.and_hms_opt(0, 0, 0).map(|t| t.and_utc());
    let Some(target) = target else {
        return 0;
    };

    let seconds = (target - now).num_seconds();
    let days = seconds / SECONDS_PER_DAY;
    if seconds % SECONDS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Amount to save each month to reach the target on time.
///
/// Months are counted on year and month only, ignoring the day. A goal due
/// this month or already overdue yields zero.
pub fn suggested_monthly_contribution(goal: &Goal, today: NaiveDate) -> Money {
    let months = (goal.target_date.year() - today.year()) * 12
        + (goal.target_date.month() as i32 - today.month() as i32);

    if months <= 0 {
        return Money::zero();
    }

    (goal.target_amount - goal.current_amount) / f64::from(months)
}

/// New goal value after saving `amount` more
pub fn add_contribution(goal: &Goal, amount: Money) -> FinanceResult<Goal> {
    if !amount.is_finite() || !amount.is_positive() {
        return Err(FinanceError::InvalidAmount(amount.value()));
    }

    Ok(Goal {
        current_amount: goal.current_amount + amount,
        ..goal.clone()
    })
}

/// Everything a goal card shows
#[derive(Debug, Clone, PartialEq)]
pub struct GoalStatus {
    pub progress: f64,
    pub is_completed: bool,
    /// Signed; negative when overdue
    pub days_remaining: i64,
    pub suggested_monthly: Money,
    pub left_to_save: Money,
}

impl GoalStatus {
    /// Progress clamped to 100 for progress bars
    pub fn display_progress(&self) -> f64 {
        self.progress.min(100.0)
    }

    /// Days remaining with overdue goals shown as zero
    pub fn display_days_remaining(&self) -> i64 {
        self.days_remaining.max(0)
    }
}

pub fn goal_status(goal: &Goal, now: DateTime<Utc>) -> GoalStatus {
    GoalStatus {
        progress: goal_progress(goal),
        is_completed: is_completed(goal),
        days_remaining: days_remaining(goal, now),
        suggested_monthly: suggested_monthly_contribution(goal, now.date_naive()),
        left_to_save: (goal.target_amount - goal.current_amount).non_negative(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::assert_close;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(target: f64, current: f64, due: NaiveDate) -> Goal {
        let mut g = Goal::new("Carro", Money::new(target), due);
        g.current_amount = Money::new(current);
        g
    }

    #[test]
    fn test_progress() {
        let g = goal(150000.0, 50000.0, date(2026, 1, 1));
        assert_close(goal_progress(&g), 100.0 / 3.0);
        assert!(!is_completed(&g));

        let done = goal(1000.0, 1200.0, date(2026, 1, 1));
        assert_close(goal_progress(&done), 120.0);
        assert!(is_completed(&done));
    }

    #[test]
    fn test_zero_target_progress_is_zero() {
        let g = goal(0.0, 10.0, date(2026, 1, 1));
        assert_eq!(goal_progress(&g), 0.0);
    }

    #[test]
    fn test_suggested_monthly_eleven_months_out() {
        let today = date(2025, 1, 20);
        let g = goal(150000.0, 50000.0, date(2025, 12, 5));
        let monthly = suggested_monthly_contribution(&g, today);
        assert_close(monthly.value(), 100000.0 / 11.0);
        assert!((monthly.value() - 9090.9).abs() < 0.1);
    }

    #[test]
    fn test_suggested_monthly_due_this_month_or_overdue() {
        let g = goal(1000.0, 0.0, date(2025, 3, 31));
        assert_eq!(suggested_monthly_contribution(&g, date(2025, 3, 1)), Money::zero());
        assert_eq!(suggested_monthly_contribution(&g, date(2025, 5, 1)), Money::zero());
    }

    #[test]
    fn test_days_remaining() {
        let g = goal(1000.0, 0.0, date(2025, 3, 10));

        let midnight = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(days_remaining(&g, midnight), 9);

        // Partial days round up
        let noon = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(days_remaining(&g, noon), 9);

        let late = Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(days_remaining(&g, late), -5);
    }

    #[test]
    fn test_status_clamps_for_display_only() {
        let g = goal(1000.0, 1500.0, date(2025, 3, 10));
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap();
        let status = goal_status(&g, now);

        assert_eq!(status.days_remaining, -5);
        assert_eq!(status.display_days_remaining(), 0);
        assert_close(status.progress, 150.0);
        assert_eq!(status.display_progress(), 100.0);
        assert_eq!(status.left_to_save, Money::zero());
        assert!(status.is_completed);
    }

    #[test]
    fn test_add_contribution() {
        let g = goal(1000.0, 100.0, date(2026, 1, 1));
        let updated = add_contribution(&g, Money::new(250.0)).unwrap();
        assert_eq!(updated.current_amount.value(), 350.0);
        assert_eq!(updated.id, g.id);
        assert_eq!(g.current_amount.value(), 100.0);

        assert!(matches!(
            add_contribution(&g, Money::zero()),
            Err(FinanceError::InvalidAmount(_))
        ));
        assert!(add_contribution(&g, Money::new(-5.0)).is_err());
    }
}
