//! Per-subject weekly breakdown.

use serde::{Deserialize, Serialize};

use super::DAYS_PER_WEEK;
use crate::slot::WeekSchedule;
use crate::subject::{self, Subject};

/// Weekly hours for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectBreakdown {
    pub subject: String,
    /// Slots carrying this subject's name across the week
    pub scheduled_hours: u32,
    /// Of those, slots marked complete
    pub completed_hours: u32,
    pub target_hours: u64,
}

/// Breakdown for each schedulable subject, in roster order.
///
/// Slots are matched by name, so manual reassignments count toward the
/// subject they name.
pub fn subject_breakdown(week: &WeekSchedule, subjects: &[Subject]) -> Vec<SubjectBreakdown> {
    subject::schedulable(subjects)
        .map(|s| {
            let (scheduled_hours, completed_hours) = week
                .slots()
                .filter(|slot| slot.is_study() && slot.assigned == s.name)
                .fold((0, 0), |(scheduled, done), slot| {
                    (scheduled + 1, done + u32::from(slot.is_completed))
                });
            SubjectBreakdown {
                subject: s.name.clone(),
                scheduled_hours,
                completed_hours,
                target_hours: u64::from(s.hours_per_day) * DAYS_PER_WEEK,
            }
        })
        .collect()
}
