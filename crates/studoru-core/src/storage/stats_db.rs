//! JSON-backed store for daily focus statistics.
//!
//! One document maps `YYYY-MM-DD` day keys to that day's aggregates and
//! ordered session records. The document is read once at open and
//! rewritten in full after every append (write-through, no batching).
//! A missing or corrupt file opens as an empty store, never a fatal
//! error; a failed write is logged and the in-memory state carries on.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{data_dir, read_json_or_default, write_json};
use crate::error::PersistenceError;
use crate::stats::{DailyStats, SessionRecord};

type DayMap = BTreeMap<String, DailyStats>;

/// Durable store for per-day focus statistics.
pub struct StatsStore {
    path: PathBuf,
    days: DayMap,
}

impl StatsStore {
    /// Open the store at `path`, loading whatever is currently durable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let days = read_json_or_default(&path);
        Self { path, days }
    }

    /// Open the store at `~/.config/studoru/stats.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open_default() -> Result<Self, PersistenceError> {
        Ok(Self::open(data_dir()?.join("stats.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Aggregates for one day, if anything was recorded on it.
    ///
    /// Reads never create an entry; a day exists only once a session
    /// has been appended to it.
    pub fn day(&self, key: &str) -> Option<&DailyStats> {
        self.days.get(key)
    }

    /// All recorded days, oldest first.
    pub fn days(&self) -> &BTreeMap<String, DailyStats> {
        &self.days
    }

    /// Append a completed session to `key`'s day, creating the day on
    /// first use, then flush the whole document.
    pub fn append(&mut self, key: &str, active_secs: u64, time: String) -> SessionRecord {
        let record = self
            .days
            .entry(key.to_string())
            .or_default()
            .append(active_secs, time);
        self.flush();
        record
    }

    /// Rewrite the document.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<(), PersistenceError> {
        write_json(&self.path, &self.days)
    }

    fn flush(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("stats flush failed, keeping in-memory state: {e}");
        }
    }
}
