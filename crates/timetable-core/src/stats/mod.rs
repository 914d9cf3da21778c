//! Completion analytics over the slot state.
//!
//! All figures are read-only scans of a [`WeekSchedule`](crate::slot::WeekSchedule):
//! - **Completion**: daily completion rate and weekly completed/target hours
//! - **Breakdown**: per-subject scheduled, completed and target hours

mod breakdown;
mod completion;

pub use breakdown::{subject_breakdown, SubjectBreakdown};
pub use completion::{compute_stats, ScheduleStats, DAYS_PER_WEEK};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::slot::WeekSchedule;
use crate::subject::Subject;

/// Everything a dashboard shows for one week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub stats: ScheduleStats,
    pub subjects: Vec<SubjectBreakdown>,
}

/// Build the summary stats and per-subject breakdown together.
pub fn report(week: &WeekSchedule, selected_day: Weekday, subjects: &[Subject]) -> StatsReport {
    StatsReport {
        stats: compute_stats(week, selected_day, subjects),
        subjects: subject_breakdown(week, subjects),
    }
}
