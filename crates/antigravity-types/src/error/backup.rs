//! Backup and restore errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by backup creation and restore.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum BackupError {
    /// No backup exists under any known suffix
    #[error("No backup found for {path}")]
    NoBackupFound {
        /// Original file the backup was looked up for
        path: String,
    },

    /// Copying between the live file and its backup failed
    #[error("Failed to copy {from} to {to}: {message}")]
    CopyFailed {
        /// Copy source
        from: String,
        /// Copy destination
        to: String,
        /// Underlying I/O message
        message: String,
    },
}
