//! Typed error definitions for the OpenCode sync engine.
//!
//! Errors are split by domain and wrapped by [`TypedError`]. All of them are:
//!
//! - **Serializable** so the command boundary can hand them to a UI
//! - **Displayable** for logging and the CLI
//! - **Matchable** through [`TypedError::kind`]

mod account;
mod backup;
mod config;
mod variant;

pub use account::AccountError;
pub use backup::BackupError;
pub use config::ConfigError;
pub use variant::VariantError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a configuration-file error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Wraps a backup/restore error
    #[error("Backup error: {0}")]
    Backup(#[from] BackupError),

    /// Wraps a variant resolution error
    #[error("Variant error: {0}")]
    Variant(#[from] VariantError),

    /// Wraps an account-related error
    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}

/// Flat error taxonomy exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No configuration directory can be resolved
    NoHomeDirectory,
    /// Document is not valid JSON where a populated document is required
    ConfigParseError,
    /// Restore found nothing to restore from
    NoBackupFound,
    /// Variant token undefined for the model's variant type
    UnknownVariant,
    /// Accounts export ran with zero enabled accounts
    NoEnabledAccounts,
    /// Requested file missing or not allowed
    NotFound,
    /// Filesystem failure
    Io,
    /// Account store failure
    Storage,
}

impl TypedError {
    /// Classify this error into the flat taxonomy.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(ConfigError::NoHomeDirectory) => ErrorKind::NoHomeDirectory,
            Self::Config(ConfigError::ParseError { .. }) => ErrorKind::ConfigParseError,
            Self::Config(ConfigError::NotFound { .. } | ConfigError::FileNotAllowed { .. }) => {
                ErrorKind::NotFound
            }
            Self::Config(ConfigError::ReadError { .. } | ConfigError::WriteError { .. })
            | Self::Backup(BackupError::CopyFailed { .. }) => ErrorKind::Io,
            Self::Backup(BackupError::NoBackupFound { .. }) => ErrorKind::NoBackupFound,
            Self::Variant(VariantError::UnknownVariant { .. }) => ErrorKind::UnknownVariant,
            Self::Account(AccountError::NoEnabledAccounts) => ErrorKind::NoEnabledAccounts,
            Self::Account(AccountError::NotFound { .. } | AccountError::StorageError { .. }) => {
                ErrorKind::Storage
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Backup(BackupError::NoBackupFound {
            path: "/tmp/opencode.json".to_string(),
        });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Backup"));
        assert!(json.contains("NoBackupFound"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = VariantError::UnknownVariant {
            variant_type: "gemini3-pro-level".to_string(),
            token: "medium".to_string(),
        };

        let msg = format!("{}", err);
        assert!(msg.contains("gemini3-pro-level"));
        assert!(msg.contains("medium"));
    }

    #[test]
    fn test_kind_classification() {
        let home: TypedError = ConfigError::NoHomeDirectory.into();
        assert_eq!(home.kind(), ErrorKind::NoHomeDirectory);

        let variant: TypedError = VariantError::UnknownVariant {
            variant_type: "gemini3-pro-level".to_string(),
            token: "max".to_string(),
        }
        .into();
        assert_eq!(variant.kind(), ErrorKind::UnknownVariant);

        let empty: TypedError = AccountError::NoEnabledAccounts.into();
        assert_eq!(empty.kind(), ErrorKind::NoEnabledAccounts);
    }
}
