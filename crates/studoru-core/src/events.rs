use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// Every state change in the engine produces an Event.
/// The UI layer consumes these for display, notification, and audio;
/// the engine itself never renders or plays sound.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        duration_secs: u64,
        /// Daily target in minutes, clamped to >= 1. The target-progress
        /// display rescales against this on start.
        target_minutes: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Timer halted without reseeding; no session is recorded.
    TimerStopped {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// One-second advancement of the active phase.
    Tick {
        phase: Phase,
        remaining_secs: u64,
        /// Progress-bar maximum, re-read from config on every tick.
        total_secs: u64,
        at: DateTime<Utc>,
    },
    /// A work phase counted down to zero; `focus_secs` is the recorded
    /// focus time for the completed session.
    WorkPhaseComplete {
        focus_secs: u64,
        at: DateTime<Utc>,
    },
    /// A break phase counted down to zero. Nothing is recorded.
    BreakPhaseComplete {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        remaining_secs: u64,
        total_secs: u64,
        is_running: bool,
        progress: f64,
        at: DateTime<Utc>,
    },
}
