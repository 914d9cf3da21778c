pub mod config;
pub mod schedule;
pub mod stats;
pub mod subject;

use std::path::PathBuf;

use chrono::Weekday;
use tracing::debug;
use timetable_core::storage::data_dir;
use timetable_core::{AppState, Config, ValidationError};

/// Config and state loaded from the data directory for one command.
pub struct Workspace {
    dir: PathBuf,
    pub config: Config,
    pub state: AppState,
}

impl Workspace {
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = data_dir()?;
        let config = Config::load_from(&dir)?;
        let state = AppState::load_from(&dir)?;
        debug!(dir = %dir.display(), subjects = state.subjects.subjects().len(), "opened workspace");
        Ok(Self { dir, config, state })
    }

    pub fn save_state(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.state.save_to(&self.dir)?;
        Ok(())
    }
}

/// clap value parser for weekday arguments.
pub fn parse_day(s: &str) -> Result<Weekday, ValidationError> {
    timetable_core::slot::parse_weekday(s)
}
