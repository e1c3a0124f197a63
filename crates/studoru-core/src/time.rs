//! Injected time source.
//!
//! Day rollover is purely lazy: stats entries are keyed by the date at
//! the moment of access, so the only clock dependency in the engine is
//! this trait. Tests use [`FixedClock`] for deterministic day keys and
//! wall-clock fields.

use chrono::{DateTime, Local};

/// Source of local wall-clock time for day keys and session timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Calendar day key, `YYYY-MM-DD`.
    fn day_key(&self) -> String {
        self.now().format("%Y-%m-%d").to_string()
    }

    /// Wall-clock time of day, `HH:MM`.
    fn wall_time(&self) -> String {
        self.now().format("%H:%M").to_string()
    }
}

/// Process-local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to one instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
