//! Account index loading.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use antigravity_types::AccountError;

use crate::error::AppResult;
use crate::models::AccountIndex;
use crate::modules::logger;

use super::paths::index_path;

/// Load the account index file. A missing index is an empty store.
pub fn load_account_index(data_dir: &Path) -> AppResult<AccountIndex> {
    let index_path = index_path(data_dir);

    let content = match fs::read_to_string(&index_path) {
        Ok(content) => content,
        Err(e) if e.kind() == IoErrorKind::NotFound => {
            logger::log_warn("Account index file does not exist");
            return Ok(AccountIndex::new());
        }
        Err(e) => {
            return Err(AccountError::StorageError {
                message: format!("Failed to read account index: {}", e),
            }
            .into())
        }
    };

    let index: AccountIndex = serde_json::from_str(&content).map_err(|e| {
        AccountError::StorageError { message: format!("Failed to parse account index: {}", e) }
    })?;

    logger::log_info(&format!("Loaded index with {} accounts", index.accounts.len()));
    Ok(index)
}
