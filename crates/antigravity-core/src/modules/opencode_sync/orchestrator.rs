//! Sync, clear and restore flows over the target tool's config directory.
//!
//! Every flow that writes a file attempts a backup of that file first.

use std::fs;
use std::path::PathBuf;

use antigravity_types::{Account, BackupError, ConfigError, ErrorKind, OpencodeStatus};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::accounts_export::AccountsExporter;
use super::backup::{self, BackupSuffix};
use super::catalog::ModelCatalog;
use super::file_utils::{read_if_exists, read_text_lenient, write_json_atomic};
use super::install;
use super::locator::{OpencodePaths, VIEWABLE_FILES};
use super::merger::{
    base_url_matches, managed_model_count, managed_provider_endpoint, parse_document_lenient,
    ClearOptions, ConfigMerger, ModelSelection,
};
use crate::error::AppResult;
use crate::modules::account::FileAccountStore;

/// Read access to the manager's accounts.
pub trait AccountSource {
    /// Every stored account, enabled or not, in store order.
    fn list_accounts(&self) -> AppResult<Vec<Account>>;

    /// The account the manager currently routes to.
    fn current_account_id(&self) -> AppResult<Option<String>>;
}

/// In-memory account source.
#[derive(Debug, Clone, Default)]
pub struct StaticAccounts {
    pub accounts: Vec<Account>,
    pub current_account_id: Option<String>,
}

impl AccountSource for StaticAccounts {
    fn list_accounts(&self) -> AppResult<Vec<Account>> {
        Ok(self.accounts.clone())
    }

    fn current_account_id(&self) -> AppResult<Option<String>> {
        Ok(self.current_account_id.clone())
    }
}

/// Input of [`OpencodeSync::sync`].
#[derive(Debug, Clone)]
pub struct SyncRequest {
    pub proxy_url: String,
    pub api_key: String,
    pub sync_accounts: bool,
    /// `None` syncs the whole catalog
    pub models: Option<Vec<ModelSelection>>,
}

impl SyncRequest {
    pub fn new(proxy_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { proxy_url: proxy_url.into(), api_key: api_key.into(), sync_accounts: false, models: None }
    }

    pub fn with_accounts(mut self, sync_accounts: bool) -> Self {
        self.sync_accounts = sync_accounts;
        self
    }

    pub fn with_models(mut self, models: Vec<ModelSelection>) -> Self {
        self.models = Some(models);
        self
    }
}

/// Outcome of a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub config_path: PathBuf,
    /// Backup written by this run, if any
    pub config_backup: Option<PathBuf>,
    pub model_count: usize,
    pub accounts_path: Option<PathBuf>,
    pub accounts_backup: Option<PathBuf>,
    pub exported_accounts: usize,
}

/// What a clear did to the exported accounts file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountsRevert {
    /// No exported file was present
    Untouched,
    /// Put back from its backup
    Restored(BackupSuffix),
    /// No backup existed; backed up, then removed
    Removed,
}

/// Outcome of a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearReport {
    /// Whether `opencode.json` was rewritten
    pub config_changed: bool,
    pub accounts: AccountsRevert,
}

/// Which backups a restore used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreReport {
    pub config: Option<BackupSuffix>,
    pub accounts: Option<BackupSuffix>,
}

/// The sync engine bound to one config directory and one account source.
#[derive(Debug, Clone)]
pub struct OpencodeSync<S> {
    paths: OpencodePaths,
    catalog: ModelCatalog,
    accounts: S,
}

impl OpencodeSync<FileAccountStore> {
    /// Engine over `~/.config/opencode` and the manager's data directory.
    pub fn from_env() -> AppResult<Self> {
        let paths = OpencodePaths::locate()?;
        let store = FileAccountStore::from_env()?;
        Ok(Self::new(paths, store))
    }
}

impl<S: AccountSource> OpencodeSync<S> {
    pub fn new(paths: OpencodePaths, accounts: S) -> Self {
        Self { paths, catalog: ModelCatalog::builtin(), accounts }
    }

    pub fn with_catalog(mut self, catalog: ModelCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn paths(&self) -> &OpencodePaths {
        &self.paths
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Write the managed provider, then optionally the accounts export.
    ///
    /// A failure in the accounts half leaves the written config in place.
    pub fn sync(&self, request: &SyncRequest) -> AppResult<SyncReport> {
        fs::create_dir_all(&self.paths.dir)
            .map_err(|e| ConfigError::write(self.paths.dir.display().to_string(), &e))?;

        let config_backup = backup::create_backup(&self.paths.config)?.map(|r| r.backup);
        let raw = read_text_lenient(&self.paths.config)?;
        let doc = parse_document_lenient(raw.as_deref());

        let models = match &request.models {
            Some(models) => models.clone(),
            None => self.catalog.ids().map(ModelSelection::new).collect(),
        };
        let merged = ConfigMerger::new(&self.catalog).apply_sync(
            doc,
            &request.api_key,
            &request.proxy_url,
            &models,
        );
        write_json_atomic(&self.paths.config, &merged)?;
        let model_count = managed_model_count(&merged);
        info!("Synced {} models into {:?}", model_count, self.paths.config);

        let mut report = SyncReport {
            config_path: self.paths.config.clone(),
            config_backup,
            model_count,
            accounts_path: None,
            accounts_backup: None,
            exported_accounts: 0,
        };

        if request.sync_accounts {
            let (backup, exported) = self.sync_accounts()?;
            report.accounts_path = Some(self.paths.accounts.clone());
            report.accounts_backup = backup;
            report.exported_accounts = exported;
        }
        Ok(report)
    }

    fn sync_accounts(&self) -> AppResult<(Option<PathBuf>, usize)> {
        let backup = backup::create_backup(&self.paths.accounts)?.map(|r| r.backup);
        let raw = read_text_lenient(&self.paths.accounts)?;
        let previous = AccountsExporter::parse_previous(raw.as_deref());

        let accounts = self.accounts.list_accounts()?;
        let current = self.accounts.current_account_id()?;
        let export = AccountsExporter::new(previous).export(&accounts, current.as_deref());

        write_json_atomic(&self.paths.accounts, &export)?;
        info!("Exported {} accounts to {:?}", export.accounts.len(), self.paths.accounts);
        Ok((backup, export.accounts.len()))
    }

    /// Remove the managed provider, then revert the exported accounts file.
    ///
    /// A missing config is a no-op; a config that is not a JSON object is an
    /// error and leaves the accounts file alone.
    pub fn clear(&self, options: &ClearOptions) -> AppResult<ClearReport> {
        let config_changed = self.clear_config(options)?;
        let accounts = self.revert_accounts()?;
        Ok(ClearReport { config_changed, accounts })
    }

    fn clear_config(&self, options: &ClearOptions) -> AppResult<bool> {
        let path = &self.paths.config;
        let Some(raw) = read_if_exists(path)? else {
            info!("No config at {:?}, nothing to clear", path);
            return Ok(false);
        };

        let doc: Value = serde_json::from_str(&raw)
            .map_err(|e| ConfigError::from_json_error(path.display().to_string(), &e))?;
        if !doc.is_object() {
            return Err(ConfigError::ParseError {
                path: path.display().to_string(),
                message: "top-level value is not an object".to_string(),
            }
            .into());
        }

        let cleared = ConfigMerger::new(&self.catalog).apply_clear(doc.clone(), options);
        if cleared == doc {
            debug!("Config at {:?} has nothing to clear", path);
            return Ok(false);
        }

        backup::create_backup(path)?;
        write_json_atomic(path, &cleared)?;
        info!("Cleared managed provider from {:?}", path);
        Ok(true)
    }

    /// Restore the accounts file from its backup, else back it up and delete it.
    fn revert_accounts(&self) -> AppResult<AccountsRevert> {
        let path = &self.paths.accounts;
        if !path.exists() {
            debug!("No accounts export at {:?}", path);
            return Ok(AccountsRevert::Untouched);
        }

        if backup::has_backup(path) {
            let record = backup::restore_backup(path)?;
            return Ok(AccountsRevert::Restored(record.suffix));
        }

        backup::create_backup(path)?;
        fs::remove_file(path).map_err(|e| ConfigError::write(path.display().to_string(), &e))?;
        info!("Removed accounts export {:?}", path);
        Ok(AccountsRevert::Removed)
    }

    /// Restore the config and accounts file from their backups, independently.
    pub fn restore(&self) -> AppResult<RestoreReport> {
        let config = restore_optional(&self.paths.config)?;
        let accounts = restore_optional(&self.paths.accounts)?;

        if config.is_none() && accounts.is_none() {
            return Err(BackupError::NoBackupFound { path: self.paths.config.display().to_string() }
                .into());
        }
        if config.is_none() {
            warn!("No config backup found, restored accounts only");
        }
        Ok(RestoreReport { config, accounts })
    }

    /// `(is_synced, has_backup, current_base_url)` for `proxy_url`.
    pub fn sync_state(&self, proxy_url: &str) -> AppResult<(bool, bool, Option<String>)> {
        let raw = read_text_lenient(&self.paths.config)?;
        let doc = parse_document_lenient(raw.as_deref());
        let endpoint = managed_provider_endpoint(&doc);

        let is_synced =
            endpoint.is_some_and(|(url, has_key)| has_key && base_url_matches(url, proxy_url));
        let has_backup = backup::has_backup(&self.paths.config);
        Ok((is_synced, has_backup, endpoint.map(|(url, _)| url.to_string())))
    }

    /// Sync state plus installation detection.
    pub fn status(&self, proxy_url: &str) -> AppResult<OpencodeStatus> {
        let (installed, version) = install::detect();
        self.status_with_install(proxy_url, installed, version)
    }

    fn status_with_install(
        &self,
        proxy_url: &str,
        installed: bool,
        version: Option<String>,
    ) -> AppResult<OpencodeStatus> {
        let (is_synced, has_backup, current_base_url) = self.sync_state(proxy_url)?;
        let files = VIEWABLE_FILES
            .iter()
            .filter(|name| self.paths.dir.join(name).exists())
            .map(|name| name.to_string())
            .collect();
        Ok(OpencodeStatus { installed, version, is_synced, has_backup, current_base_url, files })
    }

    /// Raw text of an allow-listed file; `None` reads `opencode.json`.
    pub fn read_file(&self, name: Option<&str>) -> AppResult<String> {
        let path = self.paths.viewable(name)?;
        read_if_exists(path)?
            .ok_or_else(|| ConfigError::NotFound { path: path.display().to_string() }.into())
    }
}

/// Restore one file; a missing backup is `None`, other failures propagate.
fn restore_optional(path: &std::path::Path) -> AppResult<Option<BackupSuffix>> {
    match backup::restore_backup(path) {
        Ok(record) => Ok(Some(record.suffix)),
        Err(e) if e.kind() == ErrorKind::NoBackupFound => {
            debug!("No backup for {:?}", path);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
