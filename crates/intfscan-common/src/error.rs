//! Error types for scan operations.
//!
//! This module defines the error types used throughout the intfscan crates.
//! All errors implement `std::error::Error` via `thiserror`.

use std::io;
use thiserror::Error;

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur during a scan run.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Failed to read the next line from the input stream.
    ///
    /// End-of-stream is not an error; this covers genuine read failures.
    #[error("Failed to read from input stream at line {line}: {source}")]
    Read {
        /// Number of the line being read when the failure occurred (1-based).
        line: u64,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Failed to write a rendered record to the structured output stream.
    #[error("Failed to write report output: {source}")]
    Write {
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Internal error (unexpected state).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl ScanError {
    /// Creates a read error for the given line number.
    pub fn read(line: u64, source: io::Error) -> Self {
        Self::Read { line, source }
    }

    /// Creates a write error.
    pub fn write(source: io::Error) -> Self {
        Self::Write { source }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error originated on the input side of the run.
    pub fn is_read(&self) -> bool {
        matches!(self, ScanError::Read { .. })
    }
}
