mod config;
pub mod schedule_db;
pub mod stats_db;

pub use config::{TimeUnit, TimerConfig};
pub use schedule_db::ScheduleCatalog;
pub use stats_db::StatsStore;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PersistenceError;

/// Returns `~/.config/studoru[-dev]/` based on STUDORU_ENV.
///
/// Set STUDORU_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, PersistenceError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDORU_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studoru-dev")
    } else {
        base_dir.join("studoru")
    };

    std::fs::create_dir_all(&dir).map_err(|e| PersistenceError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// Read a JSON document, falling back to the default value.
///
/// A missing file is a normal first run; a corrupt file is logged and
/// replaced by the default rather than treated as fatal.
pub(crate) fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "corrupt store, starting empty: {e}");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Rewrite a JSON document in full.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    let content = serde_json::to_string_pretty(value).map_err(|e| PersistenceError::SaveFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, content).map_err(|e| PersistenceError::SaveFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
