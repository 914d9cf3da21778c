//! # Timetable Core Library
//!
//! This library provides the core logic for Timetable, a personal study
//! planner that lays subject work around fixed daily obligations (prayer
//! times). All operations are available via the standalone CLI binary; the
//! library itself is synchronous, in-memory and persistence-agnostic apart
//! from the optional [`storage`] helpers.
//!
//! ## Architecture
//!
//! - **Calendar**: fixed obligations and the hour window of a day
//! - **Subjects**: the roster of subjects with daily hour demand and priority
//! - **Scheduler**: the slot allocator and weekly expansion
//! - **Store**: the mutable slot state (completion, manual reassignment)
//! - **Stats**: completion analytics over the store
//!
//! ## Key Components
//!
//! - [`SlotAllocator`]: Generates days and weeks
//! - [`SlotStateStore`]: Snapshot-consistent slot state
//! - [`compute_stats`]: Completion rate and weekly totals
//! - [`Config`]: Application configuration management

pub mod calendar;
pub mod error;
pub mod scheduler;
pub mod slot;
pub mod stats;
pub mod storage;
pub mod store;
pub mod subject;

pub use calendar::{FixedObligation, HourWindow, ObligationCalendar};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use scheduler::{SchedulerConfig, SlotAllocator};
pub use slot::{DaySchedule, ScheduledDay, Slot, WeekSchedule, FREE};
pub use stats::{compute_stats, subject_breakdown, ScheduleStats, StatsReport, SubjectBreakdown};
pub use storage::{AppState, Config};
pub use store::SlotStateStore;
pub use subject::{Priority, Roster, Subject, SubjectPatch};
