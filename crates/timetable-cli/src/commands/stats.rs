use chrono::Weekday;
use timetable_core::stats;

use super::Workspace;

pub fn run(day: Option<Weekday>) -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::open()?;
    let store = &ws.state.schedule;
    let day = day.unwrap_or(store.selected_day());

    let report = stats::report(store.week(), day, ws.state.subjects.subjects());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
