//! Weekly expansion: one independent day per weekday.

use chrono::Weekday;
use rand::Rng;
use tracing::info;

use super::SlotAllocator;
use crate::calendar::ObligationCalendar;
use crate::error::ValidationError;
use crate::slot::{ScheduledDay, WeekSchedule};
use crate::subject::{self, Subject};

impl SlotAllocator {
    /// Generate a week, one call to [`SlotAllocator::generate_day`] per
    /// weekday in the given order. Hours per day are a daily budget; nothing
    /// carries over between days.
    ///
    /// # Errors
    /// [`ValidationError::NoRequestedHours`] when no schedulable subject
    /// requests any time. Nothing is generated in that case.
    pub fn generate_week<R: Rng + ?Sized>(
        &self,
        subjects: &[Subject],
        calendar: &ObligationCalendar,
        hours: &[u8],
        weekdays: &[Weekday],
        rng: &mut R,
    ) -> Result<WeekSchedule, ValidationError> {
        let requested = subject::total_daily_hours(subjects);
        if requested == 0 {
            return Err(ValidationError::NoRequestedHours);
        }

        let days = weekdays
            .iter()
            .map(|&weekday| ScheduledDay {
                weekday,
                slots: self.generate_day(subjects, calendar, hours, rng),
            })
            .collect();

        info!(days = weekdays.len(), requested, "generated week");
        Ok(WeekSchedule::new(days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HourWindow;
    use crate::slot::full_week;
    use crate::subject::Priority;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    #[test]
    fn test_week_has_one_day_per_weekday_in_order() {
        let allocator = SlotAllocator::new();
        let subjects = vec![Subject::new("Math", 2, Priority::High)];
        let weekdays = vec![Weekday::Sat, Weekday::Mon, Weekday::Wed];
        let mut rng = Mcg128Xsl64::seed_from_u64(1);

        let week = allocator
            .generate_week(
                &subjects,
                &ObligationCalendar::default(),
                &HourWindow::default().hours(),
                &weekdays,
                &mut rng,
            )
            .unwrap();

        assert_eq!(week.weekdays().collect::<Vec<_>>(), weekdays);
        for day in week.days() {
            assert_eq!(day.slots.len(), 20);
            assert_eq!(day.slots.study_slots().count(), 2);
        }
    }

    #[test]
    fn test_daily_budget_is_not_split_across_week() {
        let allocator = SlotAllocator::new();
        let subjects = vec![
            Subject::new("Math", 3, Priority::High),
            Subject::new("Art", 1, Priority::Low),
        ];
        let mut rng = Mcg128Xsl64::seed_from_u64(2);

        let week = allocator
            .generate_week(
                &subjects,
                &ObligationCalendar::default(),
                &HourWindow::default().hours(),
                &full_week(),
                &mut rng,
            )
            .unwrap();

        assert_eq!(week.days().len(), 7);
        assert_eq!(week.slots().filter(|s| s.is_study()).count(), 28);
    }

    #[test]
    fn test_demand_summing_past_u32_fills_every_day() {
        let allocator = SlotAllocator::new();
        let subjects = vec![
            Subject::new("Math", u32::MAX / 2 + 1, Priority::High),
            Subject::new("Art", u32::MAX / 2 + 1, Priority::Low),
        ];
        let mut rng = Mcg128Xsl64::seed_from_u64(4);

        let week = allocator
            .generate_week(
                &subjects,
                &ObligationCalendar::default(),
                &HourWindow::default().hours(),
                &full_week(),
                &mut rng,
            )
            .unwrap();

        for day in week.days() {
            assert_eq!(day.slots.study_slots().count(), 15);
        }
    }

    #[test]
    fn test_zero_requested_hours_is_refused() {
        let allocator = SlotAllocator::new();
        let subjects = vec![
            Subject::new("Math", 0, Priority::High),
            Subject::new("", 5, Priority::High),
        ];
        let mut rng = Mcg128Xsl64::seed_from_u64(3);

        let result = allocator.generate_week(
            &subjects,
            &ObligationCalendar::default(),
            &HourWindow::default().hours(),
            &full_week(),
            &mut rng,
        );
        assert_eq!(result, Err(ValidationError::NoRequestedHours));
    }
}
