//! TOML-based application configuration.
//!
//! Stores scheduling preferences:
//! - Run-length cap and optional shuffle seed
//! - The hour window a day is scheduled over
//! - Fixed obligations (the five daily prayers by default)
//! - Which weekdays a generated week covers
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use chrono::Weekday;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::calendar::{default_prayers, FixedObligation, HourWindow, ObligationCalendar};
use crate::error::{ConfigError, Result};
use crate::scheduler::SchedulerConfig;
use crate::slot::parse_weekday;

/// Allocator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerSection {
    #[serde(default = "default_max_consecutive")]
    pub max_consecutive_same_subject: u32,
    /// Fixed shuffle seed; unset draws from OS entropy on every generation.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Inclusive hour window of a scheduled day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_start_hour")]
    pub start_hour: u8,
    #[serde(default = "default_end_hour")]
    pub end_hour: u8,
}

/// Weekdays covered by a generated week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekConfig {
    #[serde(default = "default_days")]
    pub days: Vec<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scheduler: SchedulerSection,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub week: WeekConfig,
    #[serde(default = "default_prayers")]
    pub obligations: Vec<FixedObligation>,
}

// Default functions
fn default_max_consecutive() -> u32 {
    3
}
fn default_start_hour() -> u8 {
    4
}
fn default_end_hour() -> u8 {
    23
}
fn default_days() -> Vec<String> {
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for SchedulerSection {
    fn default() -> Self {
        Self {
            max_consecutive_same_subject: default_max_consecutive(),
            seed: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
        }
    }
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheduler: SchedulerSection::default(),
            window: WindowConfig::default(),
            week: WeekConfig::default(),
            obligations: default_prayers(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn parse_scalar(key: &str, value: &str) -> Result<serde_json::Value, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        if let Ok(n) = value.parse::<u64>() {
            return Ok(serde_json::Value::Number(n.into()));
        }
        if let Ok(n) = value.parse::<f64>() {
            return serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")));
        }
        if let Ok(b) = value.parse::<bool>() {
            return Ok(serde_json::Value::Bool(b));
        }
        Ok(serde_json::Value::String(value.into()))
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => match Self::parse_scalar(key, value)? {
                        n @ serde_json::Value::Number(_) => n,
                        _ => return Err(invalid(format!("cannot parse '{value}' as number"))),
                    },
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    // Unset optionals take whatever the text parses as.
                    serde_json::Value::Null => Self::parse_scalar(key, value)?,
                    serde_json::Value::String(_) => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Config file location inside `dir`.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join("config.toml")
    }

    /// Load from `dir`, writing and returning the default when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// fails validation, or if the default config cannot be written.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(dir)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        let path = Self::path_in(dir);
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.clone(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. Does not persist; call [`Config::save_to`].
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the result fails validation. `self` is unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Check every section converts into its domain type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scheduler.max_consecutive_same_subject == 0 {
            return Err(ConfigError::InvalidValue {
                key: "scheduler.max_consecutive_same_subject".into(),
                message: "must be at least 1".into(),
            });
        }
        self.window()?;
        self.calendar()?;
        self.weekdays()?;
        Ok(())
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            max_consecutive_same_subject: self.scheduler.max_consecutive_same_subject,
        }
    }

    pub fn window(&self) -> Result<HourWindow, ConfigError> {
        HourWindow::new(self.window.start_hour, self.window.end_hour).map_err(|e| {
            ConfigError::InvalidValue {
                key: "window".into(),
                message: e.to_string(),
            }
        })
    }

    pub fn calendar(&self) -> Result<ObligationCalendar, ConfigError> {
        ObligationCalendar::new(self.obligations.clone()).map_err(|e| ConfigError::InvalidValue {
            key: "obligations".into(),
            message: e.to_string(),
        })
    }

    pub fn weekdays(&self) -> Result<Vec<Weekday>, ConfigError> {
        self.week
            .days
            .iter()
            .map(|d| parse_weekday(d))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::InvalidValue {
                key: "week.days".into(),
                message: e.to_string(),
            })
    }

    /// Shuffle source: seeded when `scheduler.seed` is set, entropy otherwise.
    pub fn rng(&self) -> Mcg128Xsl64 {
        match self.scheduler.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        }
    }
}
