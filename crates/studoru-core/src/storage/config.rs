//! TOML-based timer configuration.
//!
//! Holds the user-editable countdown durations and the daily focus
//! target. Durations are entered in [`TimeUnit`] and converted to
//! seconds for all engine use; the engine never sees the display unit.
//!
//! Configuration is stored at `~/.config/studoru/config.toml`. The
//! engine re-reads current values on every tick and at every phase
//! boundary, so an edit applies from the next tick onward without
//! invalidating the countdown in progress.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{PersistenceError, ValidationError};

/// Display unit for the duration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Minutes,
    Seconds,
}

/// Timer configuration.
///
/// Serialized to/from TOML at `~/.config/studoru/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Work-phase duration, in `unit`.
    #[serde(default = "default_work_duration")]
    pub work_duration: u32,
    /// Break-phase duration, in `unit`.
    #[serde(default = "default_break_duration")]
    pub break_duration: u32,
    /// Daily focus target, always in minutes.
    #[serde(default = "default_target_minutes")]
    pub target_minutes: u32,
    #[serde(default)]
    pub unit: TimeUnit,
}

fn default_work_duration() -> u32 {
    25
}
fn default_break_duration() -> u32 {
    5
}
fn default_target_minutes() -> u32 {
    120
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_duration: default_work_duration(),
            break_duration: default_break_duration(),
            target_minutes: default_target_minutes(),
            unit: TimeUnit::default(),
        }
    }
}

impl TimerConfig {
    /// Work-phase duration in seconds, regardless of display unit.
    pub fn work_secs(&self) -> u64 {
        self.to_secs(self.work_duration)
    }

    /// Break-phase duration in seconds, regardless of display unit.
    pub fn break_secs(&self) -> u64 {
        self.to_secs(self.break_duration)
    }

    fn to_secs(&self, value: u32) -> u64 {
        match self.unit {
            TimeUnit::Seconds => u64::from(value),
            TimeUnit::Minutes => u64::from(value) * 60,
        }
    }

    /// Daily target clamped to >= 1 so progress ratios never divide by zero.
    pub fn target_minutes_clamped(&self) -> u64 {
        u64::from(self.target_minutes).max(1)
    }

    /// Check that every numeric field is positive.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field;
    /// nothing is mutated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("work_duration", self.work_duration),
            ("break_duration", self.break_duration),
            ("target_minutes", self.target_minutes),
        ] {
            if value == 0 {
                return Err(ValidationError::invalid(field, "must be greater than zero"));
            }
        }
        Ok(())
    }

    /// Get a config value as a string by field name.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match json.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by field name, parsing the string against the
    /// field's existing type.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an unknown key or an
    /// unparseable value; the config is unchanged on failure.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ValidationError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ValidationError::invalid(key, e.to_string()))?;
        let obj = json
            .as_object_mut()
            .ok_or_else(|| ValidationError::UnknownKey(key.to_string()))?;
        let existing = obj
            .get(key)
            .ok_or_else(|| ValidationError::UnknownKey(key.to_string()))?;

        let new_value = match existing {
            serde_json::Value::Number(_) => {
                let n: u32 = value
                    .parse()
                    .map_err(|_| ValidationError::invalid(key, format!("'{value}' is not a number")))?;
                serde_json::Value::Number(n.into())
            }
            _ => serde_json::Value::String(value.to_string()),
        };
        obj.insert(key.to_string(), new_value);

        *self = serde_json::from_value(json)
            .map_err(|e| ValidationError::invalid(key, e.to_string()))?;
        Ok(())
    }

    fn path() -> Result<PathBuf, PersistenceError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    /// A missing file yields the default.
    pub fn load() -> Result<Self, PersistenceError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| PersistenceError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), PersistenceError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| PersistenceError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| PersistenceError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, falling back to the default on any failure.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("config load failed, using defaults: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = TimerConfig::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: TimerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn seconds_conversion_respects_unit() {
        let mut cfg = TimerConfig::default();
        assert_eq!(cfg.work_secs(), 25 * 60);
        assert_eq!(cfg.break_secs(), 5 * 60);

        cfg.unit = TimeUnit::Seconds;
        assert_eq!(cfg.work_secs(), 25);
        assert_eq!(cfg.break_secs(), 5);
    }

    #[test]
    fn validate_rejects_zero_fields() {
        let mut cfg = TimerConfig::default();
        assert!(cfg.validate().is_ok());

        cfg.work_duration = 0;
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "work_duration"));
    }

    #[test]
    fn get_returns_string_for_all_fields() {
        let cfg = TimerConfig::default();
        assert_eq!(cfg.get("work_duration").as_deref(), Some("25"));
        assert_eq!(cfg.get("break_duration").as_deref(), Some("5"));
        assert_eq!(cfg.get("target_minutes").as_deref(), Some("120"));
        assert_eq!(cfg.get("unit").as_deref(), Some("minutes"));
        assert!(cfg.get("missing_key").is_none());
    }

    #[test]
    fn set_updates_numeric_field() {
        let mut cfg = TimerConfig::default();
        cfg.set("work_duration", "50").unwrap();
        assert_eq!(cfg.work_duration, 50);
    }

    #[test]
    fn set_updates_unit() {
        let mut cfg = TimerConfig::default();
        cfg.set("unit", "seconds").unwrap();
        assert_eq!(cfg.unit, TimeUnit::Seconds);
    }

    #[test]
    fn set_rejects_non_numeric_value_without_mutating() {
        let mut cfg = TimerConfig::default();
        let err = cfg.set("work_duration", "abc").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
        assert_eq!(cfg.work_duration, 25);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = TimerConfig::default();
        let err = cfg.set("nonexistent", "1").unwrap_err();
        assert_eq!(err, ValidationError::UnknownKey("nonexistent".into()));
    }

    #[test]
    fn set_rejects_invalid_unit_without_mutating() {
        let mut cfg = TimerConfig::default();
        assert!(cfg.set("unit", "hours").is_err());
        assert_eq!(cfg.unit, TimeUnit::Minutes);
    }
}
