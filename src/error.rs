//! Error types for the dashboard core
//!
//! Errors are classified by where they surface:
//! - Intake: form input rejected before an event is constructed
//! - Store: persistence plumbing (IO, serialization, missing home dir)
//!
//! Load paths never return errors to callers; per the fallback policy they
//! degrade to defaults and log. Save and intake paths propagate.

use thiserror::Error;

/// Errors produced by intake validation and store persistence.
#[derive(Debug, Error)]
pub enum BoardError {
    // Intake errors
    #[error("Event title must not be empty")]
    EmptyTitle,

    #[error("Invalid time '{0}': expected HH:mm")]
    InvalidTime(String),

    #[error("Duration must be at least one minute, got {0}")]
    InvalidDuration(u32),

    // Store errors
    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BoardError {
    /// Returns true if this error came from user-supplied form input.
    pub fn is_intake(&self) -> bool {
        matches!(
            self,
            BoardError::EmptyTitle | BoardError::InvalidTime(_) | BoardError::InvalidDuration(_)
        )
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
