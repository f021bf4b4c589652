//! Account file loading.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use antigravity_types::AccountError;

use crate::error::AppResult;
use crate::models::Account;
use crate::modules::logger;

use super::index::load_account_index;
use super::paths::account_path;

/// Load a single account by ID.
pub fn load_account(data_dir: &Path, account_id: &str) -> AppResult<Account> {
    let account_path = account_path(data_dir, account_id);

    let content = fs::read_to_string(&account_path).map_err(|e| {
        if e.kind() == IoErrorKind::NotFound {
            AccountError::NotFound { id: account_id.to_string() }
        } else {
            AccountError::StorageError { message: format!("Failed to read account data: {}", e) }
        }
    })?;

    let account = serde_json::from_str(&content).map_err(|e| AccountError::StorageError {
        message: format!("Failed to parse account data: {}", e),
    })?;
    Ok(account)
}

/// List accounts in index order, skipping entries that fail to load.
pub fn list_accounts(data_dir: &Path) -> AppResult<Vec<Account>> {
    let index = load_account_index(data_dir)?;
    let mut accounts = Vec::with_capacity(index.accounts.len());

    for summary in &index.accounts {
        match load_account(data_dir, &summary.id) {
            Ok(account) => accounts.push(account),
            Err(e) => logger::log_error(&format!("Failed to load account {}: {}", summary.id, e)),
        }
    }

    Ok(accounts)
}
