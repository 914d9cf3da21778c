//! Subject demand model.
//!
//! A subject is a user-declared study topic with a daily hour target and a
//! 1-3 priority. Subjects with an empty name or zero hours stay in the roster
//! but are never scheduled.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Subject priority (1 = low, 3 = high).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl TryFrom<u8> for Priority {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            other => Err(ValidationError::PriorityOutOfRange(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority as u8
    }
}

impl std::str::FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => other
                .parse::<u8>()
                .map_err(|_| ValidationError::InvalidValue {
                    field: "priority".to_string(),
                    message: format!("expected low, medium, high or 1-3, got '{s}'"),
                })
                .and_then(Priority::try_from),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(label)
    }
}

/// A study subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Stable unique identifier
    pub id: String,
    pub name: String,
    /// Requested hours per day (one work unit per hour)
    pub hours_per_day: u32,
    pub priority: Priority,
}

impl Subject {
    /// Create a subject with a fresh id.
    pub fn new(name: impl Into<String>, hours_per_day: u32, priority: Priority) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            hours_per_day,
            priority,
        }
    }

    /// Whether the allocator should consider this subject at all.
    pub fn is_schedulable(&self) -> bool {
        !self.name.trim().is_empty() && self.hours_per_day > 0
    }
}

/// Subjects the allocator will place, in input order.
pub fn schedulable(subjects: &[Subject]) -> impl Iterator<Item = &Subject> {
    subjects.iter().filter(|s| s.is_schedulable())
}

/// Sum of `hours_per_day` over schedulable subjects.
pub fn total_daily_hours(subjects: &[Subject]) -> u64 {
    schedulable(subjects).map(|s| u64::from(s.hours_per_day)).sum()
}

/// Partial update for [`Roster::update`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct SubjectPatch {
    pub name: Option<String>,
    pub hours_per_day: Option<u32>,
    pub priority: Option<Priority>,
}

/// Ordered list of subjects as the user declared them.
///
/// Order matters: equal-priority subjects keep their roster order when the
/// allocator sorts by priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    subjects: Vec<Subject>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn get(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Append a new subject and return its id.
    pub fn add(&mut self, name: impl Into<String>, hours_per_day: u32, priority: Priority) -> String {
        let subject = Subject::new(name, hours_per_day, priority);
        let id = subject.id.clone();
        self.subjects.push(subject);
        id
    }

    /// Edit a subject in place.
    pub fn update(&mut self, id: &str, patch: SubjectPatch) -> Result<&Subject, ValidationError> {
        let subject = self
            .subjects
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ValidationError::UnknownSubject(id.to_string()))?;

        if let Some(name) = patch.name {
            subject.name = name;
        }
        if let Some(hours) = patch.hours_per_day {
            subject.hours_per_day = hours;
        }
        if let Some(priority) = patch.priority {
            subject.priority = priority;
        }
        Ok(subject)
    }

    /// Remove a subject, returning it.
    pub fn remove(&mut self, id: &str) -> Result<Subject, ValidationError> {
        let pos = self
            .subjects
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ValidationError::UnknownSubject(id.to_string()))?;
        Ok(self.subjects.remove(pos))
    }

    pub fn total_daily_hours(&self) -> u64 {
        total_daily_hours(&self.subjects)
    }
}

impl From<Vec<Subject>> for Roster {
    fn from(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parses_names_and_numbers() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("Low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("2".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!(
            "4".parse::<Priority>(),
            Err(ValidationError::PriorityOutOfRange(4))
        );
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_serializes_as_number() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "3");
        assert!(serde_json::from_str::<Priority>("0").is_err());
    }

    #[test]
    fn unschedulable_subjects_are_excluded_from_totals() {
        let subjects = vec![
            Subject::new("Math", 2, Priority::High),
            Subject::new("", 3, Priority::High),
            Subject::new("   ", 1, Priority::Low),
            Subject::new("Art", 0, Priority::Low),
            Subject::new("Physics", 1, Priority::Low),
        ];
        assert_eq!(total_daily_hours(&subjects), 3);
        assert_eq!(schedulable(&subjects).count(), 2);
    }

    #[test]
    fn total_daily_hours_does_not_wrap() {
        let subjects = vec![
            Subject::new("Math", u32::MAX, Priority::High),
            Subject::new("Art", u32::MAX, Priority::Low),
        ];
        assert_eq!(total_daily_hours(&subjects), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn roster_add_update_remove() {
        let mut roster = Roster::new();
        let math = roster.add("Math", 2, Priority::High);
        let art = roster.add("Art", 1, Priority::Low);
        assert_ne!(math, art);

        let updated = roster
            .update(
                &art,
                SubjectPatch {
                    hours_per_day: Some(3),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.hours_per_day, 3);
        assert_eq!(updated.name, "Art");
        assert_eq!(roster.total_daily_hours(), 5);

        let removed = roster.remove(&math).unwrap();
        assert_eq!(removed.name, "Math");
        assert_eq!(roster.subjects().len(), 1);
        assert_eq!(
            roster.remove(&math),
            Err(ValidationError::UnknownSubject(math.clone()))
        );
    }

    #[test]
    fn id_is_stable_across_edits() {
        let mut roster = Roster::new();
        let id = roster.add("Chem", 1, Priority::Medium);
        roster
            .update(
                &id,
                SubjectPatch {
                    name: Some("Chemistry".into()),
                    priority: Some(Priority::High),
                    ..Default::default()
                },
            )
            .unwrap();
        let subject = roster.get(&id).unwrap();
        assert_eq!(subject.name, "Chemistry");
        assert_eq!(subject.priority, Priority::High);
    }
}
