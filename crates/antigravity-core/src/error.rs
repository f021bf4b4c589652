//! Unified error types for Antigravity Core.

use antigravity_types::{
    AccountError, BackupError, ConfigError, ErrorKind, TypedError, VariantError,
};
use serde::Serialize;
use thiserror::Error;

/// Main error type for all sync engine operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Domain error with a stable kind (see [`ErrorKind`]).
    #[error(transparent)]
    Typed(#[from] TypedError),

    /// File system I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Flat error kind for callers that branch on failure type.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Typed(e) => e.kind(),
            Self::Io(_) | Self::Json(_) => ErrorKind::Io,
        }
    }
}

macro_rules! impl_from_domain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AppError {
                fn from(e: $ty) -> Self {
                    AppError::Typed(TypedError::from(e))
                }
            }
        )*
    };
}

impl_from_domain!(ConfigError, BackupError, VariantError, AccountError);

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for Antigravity operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_keep_their_kind() {
        let err: AppError = BackupError::NoBackupFound { path: "x".to_string() }.into();
        assert_eq!(err.kind(), ErrorKind::NoBackupFound);
        assert_eq!(err.to_string(), "Backup error: No backup found for x");

        let err: AppError = ConfigError::NoHomeDirectory.into();
        assert_eq!(err.kind(), ErrorKind::NoHomeDirectory);
    }

    #[test]
    fn test_serializes_as_message() {
        let err: AppError = BackupError::NoBackupFound { path: "x".to_string() }.into();
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            "\"Backup error: No backup found for x\""
        );
    }
}
