use chrono::Weekday;
use clap::Subcommand;
use timetable_core::{SlotAllocator, WeekSchedule};

use super::{parse_day, Workspace};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Generate a new week, discarding the current one
    Generate,
    /// Show a day as JSON
    Show {
        /// Day to show (defaults to the selected day)
        #[arg(long, value_parser = parse_day)]
        day: Option<Weekday>,
        /// Show every day
        #[arg(long, conflicts_with = "day")]
        week: bool,
    },
    /// Select the current day
    Select {
        #[arg(value_parser = parse_day)]
        day: Weekday,
    },
    /// Toggle completion of a slot
    Toggle {
        #[arg(value_parser = parse_day)]
        day: Weekday,
        /// Slot index within the day (0-based)
        index: usize,
    },
    /// Assign any subject name (or "Free") to a slot
    Assign {
        #[arg(value_parser = parse_day)]
        day: Weekday,
        /// Slot index within the day (0-based)
        index: usize,
        /// New assignment
        subject: String,
    },
}

fn print_slot(week: &WeekSchedule, day: Weekday, index: usize) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(slot) = week.day(day).and_then(|d| d.get(index)) {
        println!("{}", serde_json::to_string_pretty(slot)?);
    }
    Ok(())
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::open()?;

    match action {
        ScheduleAction::Generate => {
            let config = &ws.config;
            let allocator = SlotAllocator::with_config(config.scheduler_config());
            let calendar = config.calendar()?;
            let hours = config.window()?.hours();
            let weekdays = config.weekdays()?;
            let mut rng = config.rng();

            ws.state.schedule.regenerate(
                &allocator,
                ws.state.subjects.subjects(),
                &calendar,
                &hours,
                &weekdays,
                &mut rng,
            )?;
            ws.save_state()?;
            println!("generated {} days", weekdays.len());
        }
        ScheduleAction::Show { day, week } => {
            let store = &ws.state.schedule;
            if week {
                println!("{}", serde_json::to_string_pretty(store.week())?);
            } else {
                let day = day.unwrap_or(store.selected_day());
                let schedule = store.day(day).cloned().unwrap_or_default();
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            }
        }
        ScheduleAction::Select { day } => {
            ws.state.schedule.select_day(day);
            ws.save_state()?;
            println!("selected {day}");
        }
        ScheduleAction::Toggle { day, index } => {
            if ws.state.schedule.toggle_completion(day, index) {
                ws.save_state()?;
                print_slot(ws.state.schedule.week(), day, index)?;
            } else {
                println!("no change");
            }
        }
        ScheduleAction::Assign {
            day,
            index,
            subject,
        } => {
            if ws.state.schedule.reassign_slot(day, index, &subject) {
                ws.save_state()?;
                print_slot(ws.state.schedule.week(), day, index)?;
            } else {
                println!("no change");
            }
        }
    }
    Ok(())
}
