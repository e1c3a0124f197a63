//! Timer engine: the countdown wired to session recording.
//!
//! [`TimerEngine`] is the single mutator of both the [`PhaseClock`] and
//! the daily statistics: every command goes through it, and a work
//! phase completing under [`TimerEngine::tick`] is recorded before the
//! event reaches the caller. Hosts with their own threading must keep
//! all calls on one logical owner; the engine itself takes no locks.

use crate::error::ValidationError;
use crate::events::Event;
use crate::stats::{SessionRecord, SessionRecorder};
use crate::storage::TimerConfig;
use crate::time::{Clock, SystemClock};

use super::PhaseClock;

/// Countdown plus recording, driven by an external one-second trigger.
pub struct TimerEngine<C: Clock = SystemClock> {
    clock: PhaseClock,
    recorder: SessionRecorder<C>,
}

impl<C: Clock> TimerEngine<C> {
    /// Engine with a freshly seeded idle clock.
    pub fn new(config: &TimerConfig, recorder: SessionRecorder<C>) -> Self {
        Self {
            clock: PhaseClock::new(config),
            recorder,
        }
    }

    /// Engine around an existing clock, e.g. one restored from disk.
    pub fn from_parts(clock: PhaseClock, recorder: SessionRecorder<C>) -> Self {
        Self { clock, recorder }
    }

    pub fn phase_clock(&self) -> &PhaseClock {
        &self.clock
    }

    pub fn recorder(&self) -> &SessionRecorder<C> {
        &self.recorder
    }

    pub fn into_parts(self) -> (PhaseClock, SessionRecorder<C>) {
        (self.clock, self.recorder)
    }

    /// Begin a fresh work phase.
    ///
    /// # Errors
    ///
    /// Fails with a [`ValidationError`] when the config is invalid;
    /// nothing changes and nothing is recorded.
    pub fn start(&mut self, config: &TimerConfig) -> Result<Event, ValidationError> {
        self.clock.start(config)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.clock.pause()
    }

    pub fn resume(&mut self) -> Option<Event> {
        self.clock.resume()
    }

    /// Halt without reseeding. An interrupted work phase records nothing.
    pub fn stop(&mut self) -> Event {
        self.clock.stop()
    }

    pub fn reset(&mut self, config: &TimerConfig) -> Event {
        self.clock.reset(config)
    }

    /// Advance one second; a completing work phase is recorded into
    /// today's statistics before the event is returned.
    pub fn tick(&mut self, config: &TimerConfig) -> Option<Event> {
        let event = self.clock.tick(config)?;
        if let Event::WorkPhaseComplete { focus_secs, .. } = event {
            self.record(focus_secs);
        }
        Some(event)
    }

    pub fn snapshot(&self, config: &TimerConfig) -> Event {
        self.clock.snapshot(config)
    }

    fn record(&mut self, focus_secs: u64) -> SessionRecord {
        let record = self.recorder.record(focus_secs);
        tracing::debug!(
            session = %record.name,
            duration_min = record.duration_min,
            "work phase recorded"
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{StatsStore, TimeUnit};
    use crate::time::FixedClock;
    use crate::timer::Phase;
    use chrono::TimeZone;

    fn secs_config(work: u32, break_: u32) -> TimerConfig {
        TimerConfig {
            work_duration: work,
            break_duration: break_,
            target_minutes: 120,
            unit: TimeUnit::Seconds,
        }
    }

    fn test_engine(dir: &tempfile::TempDir, config: &TimerConfig) -> TimerEngine<FixedClock> {
        let store = StatsStore::open(dir.path().join("stats.json"));
        let at = chrono::Local.with_ymd_and_hms(2026, 3, 9, 9, 0, 0).unwrap();
        TimerEngine::new(config, SessionRecorder::with_clock(store, FixedClock(at)))
    }

    #[test]
    fn completing_a_work_phase_records_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = secs_config(1, 1);
        let mut engine = test_engine(&dir, &config);

        engine.start(&config).unwrap();
        let event = engine.tick(&config).unwrap();
        assert!(matches!(event, Event::WorkPhaseComplete { focus_secs: 1, .. }));
        assert_eq!(engine.phase_clock().phase(), Phase::Break);

        let today = engine.recorder().today();
        assert_eq!(today.sessions, 1);
        assert_eq!(today.total_focus_secs, 1);
        assert_eq!(today.details[0].time, "09:00");
    }

    #[test]
    fn stop_before_any_tick_records_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = secs_config(5, 1);
        let mut engine = test_engine(&dir, &config);

        engine.start(&config).unwrap();
        engine.stop();
        assert_eq!(engine.recorder().today(), Default::default());
    }

    #[test]
    fn two_full_cycles_record_two_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let config = secs_config(2, 1);
        let mut engine = test_engine(&dir, &config);
        engine.start(&config).unwrap();

        // work(2) -> break(1) -> work(2) -> break(1)
        for _ in 0..6 {
            engine.tick(&config);
        }

        let today = engine.recorder().today();
        assert_eq!(today.sessions, 2);
        assert_eq!(today.total_focus_secs, 4);
        assert_eq!(today.details[0].name, "Session 1");
        assert_eq!(today.details[1].name, "Session 2");
    }

    #[test]
    fn break_completion_records_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = secs_config(1, 2);
        let mut engine = test_engine(&dir, &config);
        engine.start(&config).unwrap();

        engine.tick(&config); // work complete, session 1
        engine.tick(&config);
        let event = engine.tick(&config).unwrap();
        assert!(matches!(event, Event::BreakPhaseComplete { .. }));
        assert_eq!(engine.recorder().today().sessions, 1);
    }
}
