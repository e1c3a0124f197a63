//! Daily focus analytics.
//!
//! Aggregates are keyed by calendar day and fed exclusively by
//! session-append events: a day's totals never decrease and its record
//! list is never edited or reordered. Day rollover is lazy -- an entry
//! for a new day exists only once something is recorded on it.

use serde::{Deserialize, Serialize};

use crate::storage::StatsStore;
use crate::time::{Clock, SystemClock};

/// One completed work phase.
///
/// Serialized exactly as persisted in the stats store: the per-day
/// sequence number is carried in `name` ("Session N").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub name: String,
    pub duration_min: u64,
    /// Local wall-clock time of completion, `HH:MM`.
    pub time: String,
}

/// Aggregate focus statistics for one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    #[serde(rename = "total_focus_sec")]
    pub total_focus_secs: u64,
    /// Completed session count.
    pub sessions: u64,
    #[serde(rename = "longest_sec")]
    pub longest_session_secs: u64,
    /// Per-session records, in completion order. Append-only.
    #[serde(default)]
    pub details: Vec<SessionRecord>,
}

impl DailyStats {
    /// Append a completed session and update the scalar aggregates.
    ///
    /// Sessions shorter than a minute are recorded with
    /// `duration_min = 0`; the second-granular total still grows.
    pub fn append(&mut self, active_secs: u64, time: String) -> SessionRecord {
        let sequence = self.sessions + 1;
        let record = SessionRecord {
            name: format!("Session {sequence}"),
            duration_min: active_secs / 60,
            time,
        };
        self.total_focus_secs += active_secs;
        self.sessions = sequence;
        self.longest_session_secs = self.longest_session_secs.max(active_secs);
        self.details.push(record.clone());
        record
    }

    pub fn total_focus_min(&self) -> u64 {
        self.total_focus_secs / 60
    }

    /// Progress toward a daily target, in `[0, 1]`.
    ///
    /// `target_minutes` is clamped to >= 1.
    pub fn target_progress_ratio(&self, target_minutes: u64) -> f64 {
        let target = target_minutes.max(1);
        self.total_focus_min().min(target) as f64 / target as f64
    }
}

/// Converts elapsed focus seconds into persisted session records.
///
/// The day key and wall-clock field are taken from the injected clock
/// at call time, so rollover needs no midnight timer.
pub struct SessionRecorder<C: Clock = SystemClock> {
    store: StatsStore,
    clock: C,
}

impl SessionRecorder<SystemClock> {
    pub fn new(store: StatsStore) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<C: Clock> SessionRecorder<C> {
    pub fn with_clock(store: StatsStore, clock: C) -> Self {
        Self { store, clock }
    }

    /// Record a completed work phase of `active_secs` focus seconds.
    ///
    /// Always succeeds; the write-through flush is best-effort and a
    /// failure never reaches the timer loop.
    pub fn record(&mut self, active_secs: u64) -> SessionRecord {
        let key = self.clock.day_key();
        let time = self.clock.wall_time();
        self.store.append(&key, active_secs, time)
    }

    /// Today's aggregates; an empty default until something is recorded.
    pub fn today(&self) -> DailyStats {
        self.store
            .day(&self.clock.day_key())
            .cloned()
            .unwrap_or_default()
    }

    pub fn today_focus_min(&self) -> u64 {
        self.today().total_focus_min()
    }

    /// Today's progress toward `target_minutes`, in `[0, 1]`.
    pub fn target_progress(&self, target_minutes: u64) -> f64 {
        self.today().target_progress_ratio(target_minutes)
    }

    pub fn store(&self) -> &StatsStore {
        &self.store
    }

    pub fn into_store(self) -> StatsStore {
        self.store
    }
}
