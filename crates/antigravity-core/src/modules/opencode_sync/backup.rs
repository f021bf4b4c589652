//! First-write-wins backups of managed files.
//!
//! A backup sits next to the original as `<file>.<suffix>.bak`. Creation only
//! happens when no backup exists under any known suffix, so the first
//! snapshot taken before the engine ever touched the file is the one that
//! survives repeated syncs. Restore copies the backup back and leaves the
//! backup in place, so restoring twice is harmless.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use antigravity_types::BackupError;
use tracing::{debug, info};

use crate::error::AppResult;

/// Backup file suffixes, newest naming first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackupSuffix {
    /// `.antigravity-manager.bak`
    Manager,
    /// `.antigravity.bak` (older releases; restore only)
    Legacy,
}

impl BackupSuffix {
    /// Lookup order for restore and existence checks.
    pub const PREFERENCE: [Self; 2] = [Self::Manager, Self::Legacy];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "antigravity-manager",
            Self::Legacy => "antigravity",
        }
    }
}

impl std::fmt::Display for BackupSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A backup that exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupRecord {
    pub original: PathBuf,
    pub backup: PathBuf,
    pub suffix: BackupSuffix,
}

/// `<path>.<suffix>.bak`
pub fn backup_path(path: &Path, suffix: BackupSuffix) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix.as_str());
    name.push(".bak");
    PathBuf::from(name)
}

/// The backup restore would use, if any.
pub fn find_backup(path: &Path) -> Option<BackupRecord> {
    BackupSuffix::PREFERENCE.into_iter().find_map(|suffix| {
        let backup = backup_path(path, suffix);
        backup.exists().then(|| BackupRecord { original: path.to_path_buf(), backup, suffix })
    })
}

pub fn has_backup(path: &Path) -> bool {
    find_backup(path).is_some()
}

/// Snapshot `path` unless a backup already exists or there is nothing to copy.
///
/// Returns the record only when a new backup file was written.
pub fn create_backup(path: &Path) -> AppResult<Option<BackupRecord>> {
    if let Some(existing) = find_backup(path) {
        debug!("Backup already present at {:?}, keeping it", existing.backup);
        return Ok(None);
    }
    if !path.exists() {
        debug!("Nothing to back up at {:?}", path);
        return Ok(None);
    }

    let suffix = BackupSuffix::Manager;
    let backup = backup_path(path, suffix);
    fs::copy(path, &backup).map_err(|e| BackupError::CopyFailed {
        from: path.display().to_string(),
        to: backup.display().to_string(),
        message: e.to_string(),
    })?;

    info!("Created backup {:?}", backup);
    Ok(Some(BackupRecord { original: path.to_path_buf(), backup, suffix }))
}

/// Copy the preferred backup over `path`.
pub fn restore_backup(path: &Path) -> AppResult<BackupRecord> {
    let record = find_backup(path)
        .ok_or_else(|| BackupError::NoBackupFound { path: path.display().to_string() })?;

    fs::copy(&record.backup, path).map_err(|e| BackupError::CopyFailed {
        from: record.backup.display().to_string(),
        to: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!("Restored {:?} from .{}.bak", path, record.suffix);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use antigravity_types::ErrorKind;

    fn bak_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.ends_with(".bak"))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("/c/opencode.json"), BackupSuffix::Manager),
            PathBuf::from("/c/opencode.json.antigravity-manager.bak")
        );
        assert_eq!(
            backup_path(Path::new("/c/opencode.json"), BackupSuffix::Legacy),
            PathBuf::from("/c/opencode.json.antigravity.bak")
        );
    }

    #[test]
    fn test_repeated_backup_creates_exactly_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opencode.json");
        fs::write(&path, "{\"v\":1}").unwrap();

        assert!(create_backup(&path).unwrap().is_some());
        fs::write(&path, "{\"v\":2}").unwrap();
        assert!(create_backup(&path).unwrap().is_none());
        assert!(create_backup(&path).unwrap().is_none());

        assert_eq!(bak_files(dir.path()), vec!["opencode.json.antigravity-manager.bak"]);
        let snapshot = fs::read_to_string(backup_path(&path, BackupSuffix::Manager)).unwrap();
        assert_eq!(snapshot, "{\"v\":1}");
    }

    #[test]
    fn test_legacy_backup_blocks_new_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opencode.json");
        fs::write(&path, "live").unwrap();
        fs::write(backup_path(&path, BackupSuffix::Legacy), "old").unwrap();

        assert!(create_backup(&path).unwrap().is_none());
        assert_eq!(bak_files(dir.path()), vec!["opencode.json.antigravity.bak"]);
    }

    #[test]
    fn test_missing_original_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opencode.json");
        assert!(create_backup(&path).unwrap().is_none());
        assert!(bak_files(dir.path()).is_empty());
    }

    #[test]
    fn test_restore_prefers_new_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opencode.json");
        fs::write(&path, "live").unwrap();
        fs::write(backup_path(&path, BackupSuffix::Manager), "new").unwrap();
        fs::write(backup_path(&path, BackupSuffix::Legacy), "old").unwrap();

        let record = restore_backup(&path).unwrap();
        assert_eq!(record.suffix, BackupSuffix::Manager);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_restore_falls_back_to_legacy_and_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opencode.json");
        fs::write(&path, "live").unwrap();
        fs::write(backup_path(&path, BackupSuffix::Legacy), "old").unwrap();

        assert_eq!(restore_backup(&path).unwrap().suffix, BackupSuffix::Legacy);
        fs::write(&path, "changed again").unwrap();
        assert_eq!(restore_backup(&path).unwrap().suffix, BackupSuffix::Legacy);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        assert!(backup_path(&path, BackupSuffix::Legacy).exists());
    }

    #[test]
    fn test_restore_without_backup_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = restore_backup(&dir.path().join("opencode.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoBackupFound);
    }
}
