//! Core error types for studoru-core.
//!
//! Every failure in the engine degrades to a safe default rather than
//! aborting: validation and lookup misses are surfaced to the caller
//! with no state mutated, and persistence failures are recovered
//! locally (logged, then continue in memory).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studoru-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Lookup misses
    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// Persistence errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Validation errors.
///
/// Surfaced to the caller; the operation that produced one has not
/// mutated any state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid value for a named field
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Required field is empty
    #[error("Required field '{field}' is empty")]
    EmptyField { field: String },

    /// Unknown configuration key
    #[error("Unknown config key: {0}")]
    UnknownKey(String),
}

impl ValidationError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Lookup misses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No schedule entry with the given name
    #[error("Schedule entry '{name}' not found")]
    ScheduleEntry { name: String },
}

/// Persistence errors.
///
/// Best-effort durability: callers on the tick path log these and keep
/// going with the in-memory state.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to read a durable document
    #[error("Failed to load {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write a durable document
    #[error("Failed to save {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Data directory could not be resolved or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
