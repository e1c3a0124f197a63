//! JSON-backed catalog of schedule presets.
//!
//! The catalog persists as an ordered list of `{ name, work, break }`
//! objects and is rewritten in full after every mutation. Duplicate
//! names are permitted; `find_by_name` and `delete` operate on the
//! first match.

use std::path::{Path, PathBuf};

use super::{data_dir, read_json_or_default, write_json};
use crate::error::{NotFoundError, PersistenceError, ValidationError};
use crate::schedule::ScheduleEntry;

/// Durable, ordered collection of schedule presets.
pub struct ScheduleCatalog {
    path: PathBuf,
    entries: Vec<ScheduleEntry>,
}

impl ScheduleCatalog {
    /// Open the catalog at `path`, loading whatever is currently durable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_json_or_default(&path);
        Self { path, entries }
    }

    /// Open the catalog at `~/.config/studoru/schedule.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open_default() -> Result<Self, PersistenceError> {
        Ok(Self::open(data_dir()?.join("schedule.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a preset and flush.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the name is empty or blank;
    /// the catalog is unchanged on failure.
    pub fn add(&mut self, entry: ScheduleEntry) -> Result<(), ValidationError> {
        if entry.name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "name".to_string(),
            });
        }
        self.entries.push(entry);
        self.flush();
        Ok(())
    }

    /// First preset with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Remove the first preset with exactly this name and flush.
    ///
    /// # Errors
    ///
    /// Returns a [`NotFoundError`] when no preset matches; the catalog
    /// is unchanged on failure.
    pub fn delete(&mut self, name: &str) -> Result<ScheduleEntry, NotFoundError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| NotFoundError::ScheduleEntry {
                name: name.to_string(),
            })?;
        let removed = self.entries.remove(index);
        self.flush();
        Ok(removed)
    }

    /// Rewrite the document.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<(), PersistenceError> {
        write_json(&self.path, &self.entries)
    }

    fn flush(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("schedule flush failed, keeping in-memory state: {e}");
        }
    }
}
