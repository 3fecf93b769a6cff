// SPDX-License-Identifier: MIT

//! Derived nutrition and step aggregates.
//!
//! Pure functions, re-derived on every read; nothing here is cached.

use serde::Serialize;

use crate::models::{FoodLog, Macros};

/// Sum consumed macros across all food logs falling on the given calendar
/// day.
///
/// Matching is a string prefix test of the stored ISO date against
/// `YYYY-MM-DD` (not timezone-aware).
pub fn daily_totals(logs: &[FoodLog], day_prefix: &str) -> Macros {
    let mut totals = Macros::default();
    for log in logs.iter().filter(|l| l.date.starts_with(day_prefix)) {
        totals.accumulate(&log.macros);
    }
    totals
}

/// Weekly step progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepProjection {
    pub weekly_total: u64,
    pub remaining: u64,
}

/// Project weekly steps from today's count alone.
///
/// A rough estimate, not a ledger: five assumed prior days at today's count
/// plus today. No persisted daily step history is read.
pub fn project_weekly_steps(today_steps: u64, weekly_goal: u64) -> StepProjection {
    // today_steps is caller-supplied; saturate instead of overflowing
    let weekly_total = today_steps.saturating_mul(6);
    StepProjection {
        weekly_total,
        remaining: weekly_goal.saturating_sub(weekly_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_log(date: &str, calories: f64) -> FoodLog {
        FoodLog {
            id: date.to_string(),
            client_id: "c1".to_string(),
            date: date.to_string(),
            meal_type: "Lunch".to_string(),
            food_name: "Test".to_string(),
            grams: 100.0,
            macros: Macros {
                calories,
                protein: 10.0,
                carbs: 20.0,
                fats: 5.0,
                fiber: 2.0,
            },
            photo_url: None,
            ai_confidence: None,
            is_verified: true,
        }
    }

    #[test]
    fn test_daily_totals_excludes_other_days() {
        let logs = vec![
            food_log("2024-05-24T08:00:00Z", 350.0),
            food_log("2024-05-24T13:00:00Z", 600.0),
            food_log("2024-05-23T13:00:00Z", 500.0),
        ];

        let totals = daily_totals(&logs, "2024-05-24");
        assert_eq!(totals.calories, 950.0);
        assert_eq!(totals.protein, 20.0);
        assert_eq!(totals.carbs, 40.0);
    }

    #[test]
    fn test_daily_totals_empty_day() {
        let logs = vec![food_log("2024-05-23T13:00:00Z", 500.0)];
        assert_eq!(daily_totals(&logs, "2024-05-24"), Macros::default());
    }

    #[test]
    fn test_weekly_step_projection() {
        let p = project_weekly_steps(8000, 70000);
        assert_eq!(p.weekly_total, 48000);
        assert_eq!(p.remaining, 22000);
    }

    #[test]
    fn test_weekly_step_projection_clamps_at_zero() {
        let p = project_weekly_steps(15000, 70000);
        assert_eq!(p.weekly_total, 90000);
        assert_eq!(p.remaining, 0);
    }

    #[test]
    fn test_weekly_step_projection_saturates_on_huge_counts() {
        let p = project_weekly_steps(u64::MAX, 70000);
        assert_eq!(p.weekly_total, u64::MAX);
        assert_eq!(p.remaining, 0);
    }
}
