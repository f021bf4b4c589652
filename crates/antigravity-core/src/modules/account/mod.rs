//! Read side of the manager's local account store.
//!
//! Layout under the data directory:
//! - `accounts.json`: index (version, summaries, `current_account_id`)
//! - `accounts/<id>.json`: one full account per file

mod current;
mod index;
mod paths;
mod storage;

use std::path::{Path, PathBuf};

pub use current::get_current_account_id;
pub use index::load_account_index;
pub use paths::{data_dir_with, get_data_dir, DATA_DIR_ENV};
pub use storage::{list_accounts, load_account};

use crate::error::AppResult;
use crate::models::Account;
use crate::modules::opencode_sync::AccountSource;

/// Account store rooted at one data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAccountStore {
    data_dir: PathBuf,
}

impl FileAccountStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    /// Store at `ANTIGRAVITY_DATA_DIR` or `~/.antigravity_tools`.
    pub fn from_env() -> AppResult<Self> {
        get_data_dir().map(Self::new)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl AccountSource for FileAccountStore {
    fn list_accounts(&self) -> AppResult<Vec<Account>> {
        list_accounts(&self.data_dir)
    }

    fn current_account_id(&self) -> AppResult<Option<String>> {
        get_current_account_id(&self.data_dir)
    }
}
