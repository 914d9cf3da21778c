//! Slot allocator for study subjects.
//!
//! This module turns daily subject demand into an hour-by-hour day:
//! - Fixed obligations keep their hours and break any running subject streak
//! - Demand is expanded into one-hour work units, highest priority first
//! - Units beyond the day's free capacity are shed from the low-priority end
//! - Admitted units are shuffled and placed first-fit, capped at
//!   `max_consecutive_same_subject` identical hours in a row
//! - Shed units stay queued behind them, in priority order, and only fill
//!   hours the run cap closes to every admitted unit

mod week;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::calendar::ObligationCalendar;
use crate::slot::{DaySchedule, Slot};
use crate::subject::{self, Subject};

/// Scheduler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Longest allowed run of one subject between breaks
    pub max_consecutive_same_subject: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_consecutive_same_subject: 3,
        }
    }
}

/// Places subject work units into the hours of a day.
pub struct SlotAllocator {
    config: SchedulerConfig,
}

impl SlotAllocator {
    /// Create a new allocator with default config
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Generate one day.
    ///
    /// # Arguments
    /// * `subjects` - Subject roster; unschedulable entries are skipped
    /// * `calendar` - Fixed obligations occupying their hours
    /// * `hours` - Hours to schedule; the result has one slot per hour
    /// * `rng` - Randomness for the unit shuffle
    ///
    /// # Returns
    /// Slots in ascending hour order. Never fails: excess demand is dropped
    /// lowest priority first, and unplaceable hours become free.
    pub fn generate_day<R: Rng + ?Sized>(
        &self,
        subjects: &[Subject],
        calendar: &ObligationCalendar,
        hours: &[u8],
        rng: &mut R,
    ) -> DaySchedule {
        let mut hours = hours.to_vec();
        hours.sort_unstable();

        let capacity = hours.iter().filter(|h| calendar.at(**h).is_none()).count();
        let mut queue = self.work_queue(subjects, capacity, rng);

        let max_run = self.config.max_consecutive_same_subject;
        let mut run: Option<(&str, u32)> = None;
        let mut slots = Vec::with_capacity(hours.len());

        for hour in hours {
            if let Some(obligation) = calendar.at(hour) {
                slots.push(Slot::obligation(obligation));
                run = None;
                continue;
            }

            let blocked = match run {
                Some((name, len)) if len >= max_run => Some(name),
                _ => None,
            };

            match queue.iter().position(|unit| Some(*unit) != blocked) {
                Some(pos) => {
                    let name = queue.remove(pos);
                    run = match run {
                        Some((prev, len)) if prev == name => Some((prev, len + 1)),
                        _ => Some((name, 1)),
                    };
                    slots.push(Slot::study(hour, name));
                }
                None => {
                    run = None;
                    slots.push(Slot::free(hour));
                }
            }
        }

        if !queue.is_empty() {
            debug!(
                unplaced = queue.len(),
                max_run, "work units left unplaced"
            );
        }

        DaySchedule::new(slots)
    }

    /// Build the placement queue: the `capacity` highest-priority work units
    /// in shuffled order, followed by the shed units in priority order.
    ///
    /// First-fit only reaches the shed tail when every admitted unit is
    /// blocked by the run cap, so an hour never goes free while some
    /// allowed unit exists.
    fn work_queue<'a, R: Rng + ?Sized>(
        &self,
        subjects: &'a [Subject],
        capacity: usize,
        rng: &mut R,
    ) -> Vec<&'a str> {
        let mut ordered: Vec<&Subject> = subject::schedulable(subjects).collect();
        // Stable: equal priorities keep roster order.
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority));

        // A subject can never fill more than `capacity` hours of one day.
        let mut units: Vec<&str> = ordered
            .into_iter()
            .flat_map(|s| {
                let per_subject = usize::try_from(s.hours_per_day).map_or(capacity, |h| h.min(capacity));
                std::iter::repeat(s.name.as_str()).take(per_subject)
            })
            .collect();

        let requested = subject::total_daily_hours(subjects);
        debug!(requested, capacity, "expanded subject demand");

        let admitted = units.len().min(capacity);
        if admitted < units.len() {
            let mut shed: HashMap<&str, usize> = HashMap::new();
            for name in &units[admitted..] {
                *shed.entry(*name).or_default() += 1;
            }
            warn!(
                requested,
                capacity,
                ?shed,
                "demand exceeds free hours, lowest-priority units kept as reserve only"
            );
        }

        units[..admitted].shuffle(rng);
        units
    }
}

impl Default for SlotAllocator {
    fn default() -> Self {
        Self::new()
    }
}
