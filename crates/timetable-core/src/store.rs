//! Slot state store.
//!
//! Holds the current [`WeekSchedule`] and the selected day. The week lives
//! behind an `Arc`: readers take cheap snapshots, and every mutation goes
//! through copy-on-write, so a snapshot never observes a later change.
//! Regeneration swaps the whole week in one assignment or not at all.

use std::sync::Arc;

use chrono::Weekday;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calendar::ObligationCalendar;
use crate::error::ValidationError;
use crate::scheduler::SlotAllocator;
use crate::slot::{DaySchedule, WeekSchedule};
use crate::subject::Subject;

/// Current week plus UI selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStateStore {
    week: Arc<WeekSchedule>,
    selected_day: Weekday,
}

impl Default for SlotStateStore {
    fn default() -> Self {
        Self {
            week: Arc::new(WeekSchedule::default()),
            selected_day: Weekday::Mon,
        }
    }
}

impl SlotStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consistent view of the current week.
    pub fn snapshot(&self) -> Arc<WeekSchedule> {
        Arc::clone(&self.week)
    }

    pub fn week(&self) -> &WeekSchedule {
        &self.week
    }

    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.week.day(weekday)
    }

    pub fn selected_day(&self) -> Weekday {
        self.selected_day
    }

    pub fn select_day(&mut self, weekday: Weekday) {
        self.selected_day = weekday;
    }

    /// Replace the week with a freshly generated one. On refusal the current
    /// week is kept as is.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        allocator: &SlotAllocator,
        subjects: &[Subject],
        calendar: &ObligationCalendar,
        hours: &[u8],
        weekdays: &[Weekday],
        rng: &mut R,
    ) -> Result<(), ValidationError> {
        let week = allocator.generate_week(subjects, calendar, hours, weekdays, rng)?;
        self.week = Arc::new(week);
        info!("week regenerated, prior assignments discarded");
        Ok(())
    }

    /// Flip completion of a study slot. Returns whether anything changed;
    /// obligations, free slots, unknown days and bad indices are no-ops.
    pub fn toggle_completion(&mut self, weekday: Weekday, index: usize) -> bool {
        if !self.day(weekday).is_some_and(|d| d.can_toggle(index)) {
            debug!(?weekday, index, "toggle ignored");
            return false;
        }
        self.day_mut(weekday)
            .is_some_and(|d| d.toggle_completion(index))
    }

    /// Set a slot's assignment to any label, with no run-length or roster
    /// checks. Assigning `"Free"` clears completion. Returns whether anything
    /// changed.
    pub fn reassign_slot(&mut self, weekday: Weekday, index: usize, subject: &str) -> bool {
        if !self.day(weekday).is_some_and(|d| d.can_reassign(index)) {
            debug!(?weekday, index, subject, "reassign ignored");
            return false;
        }
        self.day_mut(weekday)
            .is_some_and(|d| d.reassign(index, subject))
    }

    fn day_mut(&mut self, weekday: Weekday) -> Option<&mut DaySchedule> {
        Arc::make_mut(&mut self.week).day_mut(weekday)
    }
}
