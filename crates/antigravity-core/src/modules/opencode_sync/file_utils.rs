//! Read and atomic-write helpers for the target tool's files.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use antigravity_types::ConfigError;
use serde::Serialize;
use tracing::warn;

use crate::error::AppResult;

/// Read a file, treating "not found" as `None`.
pub fn read_if_exists(path: &Path) -> AppResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::read(path.display().to_string(), &e).into()),
    }
}

/// Read a file as text for a lenient parse.
///
/// "Not found" and content that is not valid UTF-8 both read as `None`.
pub fn read_text_lenient(path: &Path) -> AppResult<Option<String>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::read(path.display().to_string(), &e).into()),
    };
    match String::from_utf8(bytes) {
        Ok(text) => Ok(Some(text)),
        Err(e) => {
            warn!("Ignoring non-UTF-8 content in {:?}: {}", path, e);
            Ok(None)
        }
    }
}

/// `<path>.tmp`
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Serialize as pretty JSON into `<file>.tmp`, then rename over `path`.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    let json_str = serde_json::to_string_pretty(value)?;
    let tmp = temp_path(path);

    if let Err(e) = fs::write(&tmp, json_str) {
        let _ = fs::remove_file(&tmp);
        return Err(ConfigError::write(tmp.display().to_string(), &e).into());
    }

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        ConfigError::write(path.display().to_string(), &e).into()
    })
}
