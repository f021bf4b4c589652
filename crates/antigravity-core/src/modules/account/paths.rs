//! Path utilities for account data storage.

use std::path::{Path, PathBuf};

use antigravity_types::ConfigError;

use crate::error::AppResult;

/// Directory name for data storage.
pub const DATA_DIR: &str = ".antigravity_tools";
/// Filename for the account index.
pub const ACCOUNTS_INDEX: &str = "accounts.json";
/// Directory name for individual account files.
pub const ACCOUNTS_DIR: &str = "accounts";
/// Overrides the data directory (container deployments, tests).
pub const DATA_DIR_ENV: &str = "ANTIGRAVITY_DATA_DIR";

/// Resolve the data directory from an environment lookup.
///
/// Priority:
/// 1. `ANTIGRAVITY_DATA_DIR`
/// 2. `<home>/.antigravity_tools`
pub fn data_dir_with<F>(lookup: F, home: Option<PathBuf>) -> AppResult<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(custom_dir) = lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
        return Ok(PathBuf::from(custom_dir));
    }
    let home = home.ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home.join(DATA_DIR))
}

/// Get the data directory path. Read-only callers do not create it.
pub fn get_data_dir() -> AppResult<PathBuf> {
    data_dir_with(|key| std::env::var(key).ok(), dirs::home_dir())
}

pub fn index_path(data_dir: &Path) -> PathBuf {
    data_dir.join(ACCOUNTS_INDEX)
}

pub fn account_path(data_dir: &Path, account_id: &str) -> PathBuf {
    data_dir.join(ACCOUNTS_DIR).join(format!("{}.json", account_id))
}
