//! Configuration-file errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while locating, reading or writing the target tool's files.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Neither `HOME` nor `USERPROFILE` resolves to a usable directory
    #[error("Cannot resolve home directory (HOME / USERPROFILE unset or empty)")]
    NoHomeDirectory,

    /// Config file not found at expected path
    #[error("Config not found: {path}")]
    NotFound {
        /// Filesystem path where config was expected
        path: String,
    },

    /// Config file is not a JSON object
    #[error("Config parse error in {path}: {message}")]
    ParseError {
        /// File that failed to parse
        path: String,
        /// Description of the parse failure
        message: String,
    },

    /// Config file could not be read
    #[error("Failed to read {path}: {message}")]
    ReadError {
        /// File that failed to read
        path: String,
        /// Underlying I/O message
        message: String,
    },

    /// Config write error (permission denied, disk full, etc)
    #[error("Failed to write {path}: {message}")]
    WriteError {
        /// File that failed to write
        path: String,
        /// Underlying I/O message
        message: String,
    },

    /// Requested file is outside the viewer allowlist
    #[error("Invalid file name: {name}")]
    FileNotAllowed {
        /// Rejected file name
        name: String,
    },
}

impl ConfigError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(path: impl Into<String>, e: &serde_json::Error) -> Self {
        Self::ParseError { path: path.into(), message: e.to_string() }
    }

    /// Create a read error from an IO error.
    pub fn read(path: impl Into<String>, e: &std::io::Error) -> Self {
        Self::ReadError { path: path.into(), message: e.to_string() }
    }

    /// Create a write error from an IO error.
    pub fn write(path: impl Into<String>, e: &std::io::Error) -> Self {
        Self::WriteError { path: path.into(), message: e.to_string() }
    }
}
