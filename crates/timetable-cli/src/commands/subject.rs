use clap::Subcommand;
use timetable_core::{Priority, SubjectPatch};

use super::Workspace;

#[derive(Subcommand)]
pub enum SubjectAction {
    /// Add a subject
    Add {
        /// Subject name
        name: String,
        /// Requested hours per day
        #[arg(long, default_value = "1")]
        hours: u32,
        /// Priority: low, medium, high (or 1-3)
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },
    /// List subjects
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit a subject
    Edit {
        /// Subject ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New hours per day
        #[arg(long)]
        hours: Option<u32>,
        /// New priority
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// Remove a subject
    Remove {
        /// Subject ID
        id: String,
    },
}

pub fn run(action: SubjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::open()?;

    match action {
        SubjectAction::Add {
            name,
            hours,
            priority,
        } => {
            let id = ws.state.subjects.add(name, hours, priority);
            ws.save_state()?;
            println!("{id}");
        }
        SubjectAction::List { json } => {
            let subjects = ws.state.subjects.subjects();
            if json {
                println!("{}", serde_json::to_string_pretty(subjects)?);
            } else {
                for s in subjects {
                    let note = if s.is_schedulable() { "" } else { "  (not scheduled)" };
                    println!(
                        "{}  {:<20} {:>2}h/day  {}{}",
                        s.id, s.name, s.hours_per_day, s.priority, note
                    );
                }
                println!("total: {}h/day", ws.state.subjects.total_daily_hours());
            }
        }
        SubjectAction::Edit {
            id,
            name,
            hours,
            priority,
        } => {
            let patch = SubjectPatch {
                name,
                hours_per_day: hours,
                priority,
            };
            let updated = ws.state.subjects.update(&id, patch)?;
            println!("{}", serde_json::to_string_pretty(updated)?);
            ws.save_state()?;
        }
        SubjectAction::Remove { id } => {
            let removed = ws.state.subjects.remove(&id)?;
            ws.save_state()?;
            println!("removed: {}", removed.name);
        }
    }
    Ok(())
}
