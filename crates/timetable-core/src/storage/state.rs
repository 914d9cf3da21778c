//! Local JSON state: the subject roster and the current week.
//!
//! Stored at `<data_dir>/state.json`. Saves go through a temporary file and
//! a rename, so readers see either the old state or the new one.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, StorageError};
use crate::store::SlotStateStore;
use crate::subject::Roster;

/// Everything the application keeps between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub subjects: Roster,
    #[serde(default)]
    pub schedule: SlotStateStore,
}

impl AppState {
    /// State file location inside `dir`.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join("state.json")
    }

    /// Load from `dir`. A missing file is an empty state.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(StorageError::ReadFailed { path, source }.into()),
        };
        let state: Self = serde_json::from_str(&content)
            .map_err(|source| StorageError::Corrupt { path: path.clone(), source })?;
        info!(path = %path.display(), "loaded state");
        Ok(state)
    }

    /// Write to `dir` atomically.
    ///
    /// # Errors
    /// Returns an error if serialization or any file operation fails.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        let path = Self::path_in(dir);
        let tmp = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(self)?;

        std::fs::write(&tmp, content).map_err(|source| StorageError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| StorageError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "saved state");
        Ok(())
    }
}
