// src/error.rs

//! Error types for the announcement watcher.
//!
//! Failures fall into three classes with different propagation rules:
//! fetch errors are transient (the cycle is skipped and the marker kept),
//! notify errors are per-sink and never block the other sinks or marker
//! persistence, and state errors are fatal because continuing without
//! durable state would silently re-notify on every restart.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for watcher operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure while fetching or decoding the announcement feed.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network failure or non-2xx HTTP status
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not a valid announcement array
    #[error("feed parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while reading or writing the last-seen marker file.
#[derive(Error, Debug)]
pub enum StateError {
    /// Marker file could not be read
    #[error("failed to read state file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Marker file could not be written durably
    #[error("failed to write state file {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StateError {
    /// Create a read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for the given path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Failure while delivering a notification through one sink.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Chat endpoint unreachable or request-level failure
    #[error("chat request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Chat endpoint replied with a non-2xx status
    #[error("chat API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Desktop notification utility could not be spawned
    #[error("notification command failed to run: {0}")]
    Command(#[from] std::io::Error),

    /// Desktop notification utility exited with a failure status
    #[error("notification command exited with status {code:?}")]
    CommandStatus { code: Option<i32> },
}

/// Unified application error type for the binary entry points.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Feed fetch failed (fatal only in single-shot mode)
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Marker persistence failed
    #[error(transparent)]
    State(#[from] StateError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
