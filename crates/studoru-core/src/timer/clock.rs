//! Work/break countdown state machine.
//!
//! The clock is tick-driven: the caller invokes [`PhaseClock::tick`]
//! once per second while the timer runs, and every tick takes the
//! current [`TimerConfig`] so that duration edits apply from the next
//! tick or phase boundary onward. Nothing about the configured
//! durations is cached between ticks.
//!
//! ## Phase transitions
//!
//! ```text
//! Work --(remaining hits 0)--> Break --(remaining hits 0)--> Work ...
//! ```
//!
//! The transition check runs *after* the decrement in the same tick, so
//! the countdown never visibly rests at `00:01` or at zero.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;
use crate::storage::TimerConfig;

/// Fallback work-phase seed when the configured duration is unusable.
pub const DEFAULT_WORK_SECS: u64 = 25 * 60;
/// Fallback break-phase seed when the configured duration is unusable.
pub const DEFAULT_BREAK_SECS: u64 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

/// Countdown state for the current phase.
///
/// Mutated only through its command methods; serializable so a host can
/// persist it between ticks (the CLI round-trips it through a JSON
/// file between invocations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseClock {
    phase: Phase,
    remaining_secs: u64,
    is_running: bool,
    /// Focus seconds accumulated in the current work phase; becomes the
    /// recorded session duration when the phase completes.
    active_secs: u64,
}

fn seed_work_secs(config: &TimerConfig) -> u64 {
    match config.work_secs() {
        0 => DEFAULT_WORK_SECS,
        secs => secs,
    }
}

fn seed_break_secs(config: &TimerConfig) -> u64 {
    match config.break_secs() {
        0 => DEFAULT_BREAK_SECS,
        secs => secs,
    }
}

impl PhaseClock {
    /// Create an idle clock in the work phase, seeded from `config`.
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            phase: Phase::Work,
            remaining_secs: seed_work_secs(config),
            is_running: false,
            active_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn active_secs(&self) -> u64 {
        self.active_secs
    }

    /// Full duration of the current phase per the *current* config.
    ///
    /// This is the progress-bar maximum: re-read on every call so a
    /// mid-countdown duration edit rescales the bar immediately without
    /// touching `remaining_secs`.
    pub fn phase_total_secs(&self, config: &TimerConfig) -> u64 {
        match self.phase {
            Phase::Work => seed_work_secs(config),
            Phase::Break => seed_break_secs(config),
        }
    }

    /// 0.0 .. 1.0 progress within the current phase.
    pub fn progress(&self, config: &TimerConfig) -> f64 {
        let total = self.phase_total_secs(config);
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs.min(total) as f64 / total as f64)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self, config: &TimerConfig) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            total_secs: self.phase_total_secs(config),
            is_running: self.is_running,
            progress: self.progress(config),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a fresh work phase from the configured durations.
    ///
    /// # Errors
    ///
    /// Fails with a [`ValidationError`] when any config field is not a
    /// positive number; the clock is unchanged on failure.
    pub fn start(&mut self, config: &TimerConfig) -> Result<Event, ValidationError> {
        config.validate()?;
        self.phase = Phase::Work;
        self.remaining_secs = config.work_secs();
        self.active_secs = 0;
        self.is_running = true;
        Ok(Event::TimerStarted {
            phase: self.phase,
            duration_secs: self.remaining_secs,
            target_minutes: config.target_minutes_clamped(),
            at: Utc::now(),
        })
    }

    /// Halt ticking; no seconds are lost. No-op unless running.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.is_running = false;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Continue ticking from the current countdown. No-op unless halted.
    pub fn resume(&mut self) -> Option<Event> {
        if self.is_running {
            return None;
        }
        self.is_running = true;
        Some(Event::TimerResumed {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Halt without reseeding. A mid-work-phase stop records nothing.
    pub fn stop(&mut self) -> Event {
        self.is_running = false;
        Event::TimerStopped {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Halt and reseed an idle work phase from fresh config (falling
    /// back to the default work duration on invalid config).
    pub fn reset(&mut self, config: &TimerConfig) -> Event {
        self.is_running = false;
        self.phase = Phase::Work;
        self.remaining_secs = seed_work_secs(config);
        self.active_secs = 0;
        Event::TimerReset {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Advance the countdown by one second. No-op unless running.
    ///
    /// Reaching zero transitions phases within the same tick: the next
    /// phase's countdown is reseeded from the config read now, so the
    /// display never rests on a finished phase. A completed work phase
    /// emits [`Event::WorkPhaseComplete`] carrying the focus seconds to
    /// record; a completed break emits [`Event::BreakPhaseComplete`].
    pub fn tick(&mut self, config: &TimerConfig) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);

        match self.phase {
            Phase::Work => {
                self.active_secs += 1;
                if self.remaining_secs == 0 {
                    let focus_secs = self.active_secs;
                    self.active_secs = 0;
                    self.remaining_secs = seed_break_secs(config);
                    self.phase = Phase::Break;
                    return Some(Event::WorkPhaseComplete {
                        focus_secs,
                        at: Utc::now(),
                    });
                }
            }
            Phase::Break => {
                if self.remaining_secs == 0 {
                    self.remaining_secs = seed_work_secs(config);
                    self.phase = Phase::Work;
                    return Some(Event::BreakPhaseComplete { at: Utc::now() });
                }
            }
        }

        Some(Event::Tick {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            total_secs: self.phase_total_secs(config),
            at: Utc::now(),
        })
    }
}
