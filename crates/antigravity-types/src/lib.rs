//! # Antigravity Types
//!
//! Core types, models, and error definitions for syncing Antigravity Manager
//! into OpenCode.
//!
//! - **`error`** - Typed error hierarchy for config files, backups, variants and accounts
//! - **`models`** - Domain models (Account, catalog entries, variant tables, accounts export)
//!
//! ## Architecture Role
//!
//! `antigravity-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!       antigravity-types (this crate)
//!                │
//!                ▼
//!       antigravity-core (sync engine)
//!                │
//!                ▼
//!        antigravity-cli
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for files and the command boundary
//! - **Clone** for cheap sharing
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{
    AccountError, BackupError, ConfigError, ErrorKind, TypedError, VariantError,
};

// Re-export core model types
pub use models::{
    Account, AccountIndex, AccountSummary, AccountsExport, AppConfig, ExportedAccount,
    ModelCatalogEntry, ModelFamily, ModelLimits, ModelModalities, OpencodeStatus, ProxyConfig,
    ThinkingParam, TokenData, VariantToken, VariantType, ACCOUNTS_EXPORT_VERSION,
};
