//! Fixed-obligation calendar and the day's scheduling window.
//!
//! Obligations (prayer times by default) are immovable one-hour entries.
//! They always occupy their hour and never compete with study work.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Latest valid hour of day.
pub const LAST_HOUR: u8 = 23;

/// An immovable one-hour entry in the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedObligation {
    pub label: String,
    /// Hour of day (0-23)
    pub hour: u8,
}

impl FixedObligation {
    pub fn new(label: impl Into<String>, hour: u8) -> Self {
        Self {
            label: label.into(),
            hour,
        }
    }
}

/// The five daily prayers at their default hours.
pub fn default_prayers() -> Vec<FixedObligation> {
    vec![
        FixedObligation::new("Fajr", 4),
        FixedObligation::new("Dhuhr", 12),
        FixedObligation::new("Asr", 17),
        FixedObligation::new("Maghrib", 19),
        FixedObligation::new("Isha", 20),
    ]
}

/// Validated set of obligations, at most one per hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FixedObligation>", into = "Vec<FixedObligation>")]
pub struct ObligationCalendar {
    obligations: Vec<FixedObligation>,
}

impl ObligationCalendar {
    /// Build a calendar, rejecting shared hours and hours past 23.
    pub fn new(mut obligations: Vec<FixedObligation>) -> Result<Self, ValidationError> {
        obligations.sort_by_key(|o| o.hour);
        for pair in obligations.windows(2) {
            if pair[0].hour == pair[1].hour {
                return Err(ValidationError::DuplicateObligationHour {
                    hour: pair[0].hour,
                    first: pair[0].label.clone(),
                    second: pair[1].label.clone(),
                });
            }
        }
        if let Some(last) = obligations.last() {
            if last.hour > LAST_HOUR {
                return Err(ValidationError::InvalidValue {
                    field: format!("obligations.{}", last.label),
                    message: format!("hour {} is past {LAST_HOUR}", last.hour),
                });
            }
        }
        Ok(Self { obligations })
    }

    /// Calendar with no obligations.
    pub fn empty() -> Self {
        Self {
            obligations: Vec::new(),
        }
    }

    /// Obligations in ascending hour order.
    pub fn obligations(&self) -> &[FixedObligation] {
        &self.obligations
    }

    pub fn at(&self, hour: u8) -> Option<&FixedObligation> {
        self.obligations.iter().find(|o| o.hour == hour)
    }

    /// Number of obligation hours falling inside `window`.
    pub fn hours_within(&self, window: &HourWindow) -> usize {
        self.obligations
            .iter()
            .filter(|o| window.contains(o.hour))
            .count()
    }
}

impl Default for ObligationCalendar {
    fn default() -> Self {
        Self {
            obligations: default_prayers(),
        }
    }
}

impl TryFrom<Vec<FixedObligation>> for ObligationCalendar {
    type Error = ValidationError;

    fn try_from(value: Vec<FixedObligation>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ObligationCalendar> for Vec<FixedObligation> {
    fn from(calendar: ObligationCalendar) -> Self {
        calendar.obligations
    }
}

/// Inclusive range of hours the day is scheduled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourWindow {
    start: u8,
    end: u8,
}

impl HourWindow {
    pub fn new(start: u8, end: u8) -> Result<Self, ValidationError> {
        if start > end || end > LAST_HOUR {
            return Err(ValidationError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn contains(&self, hour: u8) -> bool {
        (self.start..=self.end).contains(&hour)
    }

    /// Hours in ascending order.
    pub fn hours(&self) -> Vec<u8> {
        (self.start..=self.end).collect()
    }

    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    /// A window always holds at least one hour.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for HourWindow {
    fn default() -> Self {
        Self { start: 4, end: 23 }
    }
}
