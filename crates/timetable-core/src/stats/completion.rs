//! Daily completion rate and weekly hour totals.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::slot::WeekSchedule;
use crate::subject::{self, Subject};

/// Days the weekly target is multiplied over.
pub const DAYS_PER_WEEK: u64 = 7;

/// Summary figures for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Percentage (0-100) of the selected day's study slots marked complete
    pub daily_completion_rate: f64,
    /// Completed study slots across the whole week
    pub weekly_completed_hours: u32,
    /// Requested daily hours of schedulable subjects, times seven
    pub weekly_target_hours: u64,
}

/// Compute completion stats.
///
/// Only study slots count: obligations and free slots are ignored. A day with
/// no study slots, or a day not in the week, has a rate of 0. The weekly
/// target reflects demand, so it may exceed what generation could place.
pub fn compute_stats(week: &WeekSchedule, selected_day: Weekday, subjects: &[Subject]) -> ScheduleStats {
    let (done, total) = week
        .day(selected_day)
        .map(|day| {
            day.study_slots().fold((0u32, 0u32), |(done, total), slot| {
                (done + u32::from(slot.is_completed), total + 1)
            })
        })
        .unwrap_or((0, 0));

    let daily_completion_rate = if total == 0 {
        0.0
    } else {
        100.0 * f64::from(done) / f64::from(total)
    };

    let weekly_completed_hours = week
        .slots()
        .filter(|s| s.is_study() && s.is_completed)
        .count() as u32;

    ScheduleStats {
        daily_completion_rate,
        weekly_completed_hours,
        weekly_target_hours: subject::total_daily_hours(subjects).saturating_mul(DAYS_PER_WEEK),
    }
}
