//! # Studoru Core Library
//!
//! Core business logic for the Studoru focus timer: a tick-driven
//! work/break countdown, per-day usage analytics with a daily-target
//! tracker, and a catalog of named schedule presets. All operations are
//! available through the standalone CLI crate; any GUI is a thin layer
//! over this library.
//!
//! ## Architecture
//!
//! - **Timer**: a tick-based state machine; the caller invokes `tick()`
//!   once per second and reads the current configuration fresh on every
//!   tick, so user edits apply from the next tick onward
//! - **Stats**: append-only per-day aggregates, persisted as a JSON
//!   document after every recorded session
//! - **Storage**: JSON document stores plus a TOML configuration file
//!   under `~/.config/studoru/`
//!
//! ## Key components
//!
//! - [`PhaseClock`]: the countdown state machine
//! - [`TimerEngine`]: countdown wired to session recording
//! - [`StatsStore`] / [`SessionRecorder`]: daily analytics persistence
//! - [`ScheduleCatalog`]: named (work, break) presets
//! - [`TimerConfig`]: user-editable durations and daily target

pub mod error;
pub mod events;
pub mod schedule;
pub mod stats;
pub mod storage;
pub mod time;
pub mod timer;

pub use error::{CoreError, NotFoundError, PersistenceError, Result, ValidationError};
pub use events::Event;
pub use schedule::ScheduleEntry;
pub use stats::{DailyStats, SessionRecord, SessionRecorder};
pub use storage::{data_dir, ScheduleCatalog, StatsStore, TimeUnit, TimerConfig};
pub use time::{Clock, FixedClock, SystemClock};
pub use timer::{Phase, PhaseClock, TimerEngine};
