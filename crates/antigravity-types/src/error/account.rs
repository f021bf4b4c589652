//! Account-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading the account store or exporting accounts.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum AccountError {
    /// Account with given ID not found
    #[error("Account not found: {id}")]
    NotFound {
        /// Unique identifier of the missing account
        id: String,
    },

    /// Account storage/filesystem error
    #[error("Account storage error: {message}")]
    StorageError {
        /// Description of the storage failure
        message: String,
    },

    /// Export ran with zero enabled accounts
    #[error("No enabled accounts to export")]
    NoEnabledAccounts,
}
