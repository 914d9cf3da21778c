//! Slot, day and week schedule types.
//!
//! A [`DaySchedule`] holds one [`Slot`] per hour of the scheduling window in
//! ascending hour order. A [`WeekSchedule`] holds one independently generated
//! day per weekday.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calendar::FixedObligation;
use crate::error::ValidationError;

/// Assignment label of a slot with nothing scheduled.
pub const FREE: &str = "Free";

/// One hour-sized cell in a day's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Hour of day (0-23)
    pub hour: u8,
    pub is_fixed_obligation: bool,
    /// Subject name, obligation label, or [`FREE`]
    pub assigned: String,
    pub is_completed: bool,
}

impl Slot {
    pub fn obligation(obligation: &FixedObligation) -> Self {
        Self {
            hour: obligation.hour,
            is_fixed_obligation: true,
            assigned: obligation.label.clone(),
            is_completed: false,
        }
    }

    pub fn study(hour: u8, subject: impl Into<String>) -> Self {
        Self {
            hour,
            is_fixed_obligation: false,
            assigned: subject.into(),
            is_completed: false,
        }
    }

    pub fn free(hour: u8) -> Self {
        Self::study(hour, FREE)
    }

    pub fn is_free(&self) -> bool {
        !self.is_fixed_obligation && self.assigned == FREE
    }

    /// Non-obligation, non-free: the slots completion is measured over.
    pub fn is_study(&self) -> bool {
        !self.is_fixed_obligation && self.assigned != FREE
    }
}

/// A day's slots in ascending hour order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySchedule {
    slots: Vec<Slot>,
}

impl DaySchedule {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    pub fn study_slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|s| s.is_study())
    }

    /// Whether [`Self::toggle_completion`] at `index` would change anything.
    pub fn can_toggle(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(Slot::is_study)
    }

    /// Whether [`Self::reassign`] at `index` would be applied.
    pub fn can_reassign(&self, index: usize) -> bool {
        self.slots
            .get(index)
            .is_some_and(|s| !s.is_fixed_obligation)
    }

    /// Flip completion on a study slot. Returns `false` (and changes nothing)
    /// for obligations, free slots and out-of-range indices.
    pub fn toggle_completion(&mut self, index: usize) -> bool {
        if !self.can_toggle(index) {
            return false;
        }
        let slot = &mut self.slots[index];
        slot.is_completed = !slot.is_completed;
        true
    }

    /// Set a slot's assignment to any label. Assigning [`FREE`] clears
    /// completion. Obligations and out-of-range indices are left untouched.
    pub fn reassign(&mut self, index: usize, subject: &str) -> bool {
        if !self.can_reassign(index) {
            return false;
        }
        let slot = &mut self.slots[index];
        slot.assigned = subject.to_string();
        if subject == FREE {
            slot.is_completed = false;
        }
        true
    }
}

impl<'a> IntoIterator for &'a DaySchedule {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

/// One weekday's entry in a [`WeekSchedule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledDay {
    pub weekday: Weekday,
    pub slots: DaySchedule,
}

/// Weekday-keyed day schedules, in the order they were generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: Vec<ScheduledDay>,
}

impl WeekSchedule {
    pub fn new(days: Vec<ScheduledDay>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[ScheduledDay] {
        &self.days
    }

    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.iter().map(|d| d.weekday)
    }

    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days
            .iter()
            .find(|d| d.weekday == weekday)
            .map(|d| &d.slots)
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> Option<&mut DaySchedule> {
        self.days
            .iter_mut()
            .find(|d| d.weekday == weekday)
            .map(|d| &mut d.slots)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All slots of all days.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.days.iter().flat_map(|d| d.slots.iter())
    }
}

/// Parse a weekday name ("Mon", "monday", ...).
pub fn parse_weekday(name: &str) -> Result<Weekday, ValidationError> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| ValidationError::UnknownWeekday(name.to_string()))
}

/// Monday through Sunday.
pub fn full_week() -> Vec<Weekday> {
    vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_day() -> DaySchedule {
        DaySchedule::new(vec![
            Slot::obligation(&FixedObligation::new("Fajr", 4)),
            Slot::study(5, "Math"),
            Slot::free(6),
        ])
    }

    #[test]
    fn toggle_is_reversible() {
        let mut day = sample_day();
        assert!(day.toggle_completion(1));
        assert!(day.get(1).unwrap().is_completed);
        assert!(day.toggle_completion(1));
        assert!(!day.get(1).unwrap().is_completed);
    }

    #[test]
    fn toggle_ignores_obligation_free_and_out_of_range() {
        let mut day = sample_day();
        let before = day.clone();
        assert!(!day.toggle_completion(0));
        assert!(!day.toggle_completion(2));
        assert!(!day.toggle_completion(3));
        assert_eq!(day, before);
    }

    #[test]
    fn reassign_to_free_clears_completion() {
        let mut day = sample_day();
        day.toggle_completion(1);
        assert!(day.reassign(1, FREE));
        let slot = day.get(1).unwrap();
        assert!(slot.is_free());
        assert!(!slot.is_completed);
    }

    #[test]
    fn reassign_accepts_any_label_but_not_obligations() {
        let mut day = sample_day();
        assert!(day.reassign(2, "Reading club"));
        assert_eq!(day.get(2).unwrap().assigned, "Reading club");
        assert!(!day.reassign(0, "Math"));
        assert_eq!(day.get(0).unwrap().assigned, "Fajr");
        assert!(!day.reassign(9, "Math"));
    }

    #[test]
    fn reassign_keeps_completion_for_subjects() {
        let mut day = sample_day();
        day.toggle_completion(1);
        day.reassign(1, "Physics");
        assert!(day.get(1).unwrap().is_completed);
    }

    #[test]
    fn weekday_parsing() {
        assert_eq!(parse_weekday("Mon").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("friday").unwrap(), Weekday::Fri);
        assert!(parse_weekday("Funday").is_err());
    }
}
