//! Sync of the proxy's models and accounts into OpenCode's config directory.
//!
//! ```text
//! commands (async) ─► OpencodeSync ─► backup ─► locator
//!                          │
//!                          ├─► ConfigMerger ─► variant
//!                          └─► AccountsExporter
//! ```

mod accounts_export;
mod backup;
mod catalog;
mod commands;
mod file_utils;
mod install;
mod locator;
mod merger;
mod orchestrator;
pub mod variant;

pub use accounts_export::AccountsExporter;
pub use backup::{
    backup_path, create_backup, find_backup, has_backup, restore_backup, BackupRecord,
    BackupSuffix,
};
pub use catalog::ModelCatalog;
pub use commands::{
    execute_opencode_clear, execute_opencode_restore, execute_opencode_sync,
    get_opencode_config_content, get_opencode_sync_status, parse_model_selections,
};
pub use install::{detect as detect_installation, extract_version};
pub use locator::{
    OpencodePaths, ANTIGRAVITY_ACCOUNTS_FILE, ANTIGRAVITY_CONFIG_FILE, OPENCODE_CONFIG_FILE,
    VIEWABLE_FILES,
};
pub use merger::{
    base_url_matches, normalize_base_url, ClearOptions, ConfigMerger, ModelSelection,
    LEGACY_PROVIDER_IDS, MANAGED_PROVIDER_ID,
};
pub use orchestrator::{
    AccountSource, AccountsRevert, ClearReport, OpencodeSync, RestoreReport, StaticAccounts,
    SyncReport, SyncRequest,
};
