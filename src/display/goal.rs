//! Savings goal display formatting

use chrono::{DateTime, Utc};

use crate::engine::{goal_status, CurrencyFormat};
use crate::models::Goal;

use super::report::{format_percentage, progress_bar, truncate};

const BAR_WIDTH: usize = 20;

/// One card per goal: progress bar, amounts, pacing
pub fn format_goal_list(goals: &[Goal], now: DateTime<Utc>, currency: &CurrencyFormat) -> String {
    if goals.is_empty() {
        return "No savings goals yet.\n".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        let status = goal_status(goal, now);

        output.push_str(&format!(
            "{} {}{}\n",
            goal.id,
            truncate(&goal.name, 40),
            if status.is_completed { "  [completed]" } else { "" }
        ));
        output.push_str(&format!(
            "  {} {:>6}  {} / {}\n",
            progress_bar(status.display_progress(), BAR_WIDTH),
            format_percentage(status.progress),
            goal.current_amount.format_with(currency),
            goal.target_amount.format_with(currency)
        ));

        if !status.is_completed {
            output.push_str(&format!(
                "  Due {} ({} days left), left to save {}, suggested {} / month\n",
                goal.target_date,
                status.display_days_remaining(),
                status.left_to_save.format_with(currency),
                status.suggested_monthly.format_with(currency)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_goal_list() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let mut goal = Goal::new(
            "Portátil",
            Money::new(600000.0),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        );
        goal.current_amount = Money::new(150000.0);

        let output = format_goal_list(&[goal], now, &CurrencyFormat::default());
        assert!(output.contains("Portátil"));
        assert!(output.contains("25%"));
        assert!(output.contains("150 000 Kz / 600 000 Kz"));
        // (600 000 - 150 000) / 6 months
        assert!(output.contains("suggested 75 000 Kz / month"));
    }

    #[test]
    fn test_completed_goal_hides_pacing() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let mut goal = Goal::new(
            "Telemóvel",
            Money::new(100000.0),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        );
        goal.current_amount = Money::new(100000.0);

        let output = format_goal_list(&[goal], now, &CurrencyFormat::default());
        assert!(output.contains("[completed]"));
        assert!(!output.contains("suggested"));
    }

    #[test]
    fn test_empty() {
        let now = Utc::now();
        assert_eq!(
            format_goal_list(&[], now, &CurrencyFormat::default()),
            "No savings goals yet.\n"
        );
    }
}
