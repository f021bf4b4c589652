//! Locates the `opencode` executable and reads its version.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

const EXECUTABLE: &str = "opencode";

#[cfg(target_os = "windows")]
const EXTENSIONS: &[&str] = &["exe", "cmd", "bat"];

static VERSION_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn version_regex() -> Option<&'static Regex> {
    VERSION_REGEX
        .get_or_init(|| Regex::new(r"(\d+(?:\.\d+)+)").ok())
        .as_ref()
}

/// Pull a dotted version out of `--version` output.
///
/// Handles `opencode/1.2.3`, `codex-cli 0.86.0` and `v2.0.1`; anything else is `unknown`.
pub fn extract_version(raw: &str) -> String {
    version_regex()
        .and_then(|re| re.captures(raw.trim()))
        .and_then(|caps| caps.get(1))
        .map_or_else(|| "unknown".to_string(), |m| m.as_str().to_string())
}

/// Candidate file names for the executable in one directory.
fn candidates(dir: &Path) -> Vec<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        EXTENSIONS.iter().map(|ext| dir.join(format!("{}.{}", EXECUTABLE, ext))).collect()
    }
    #[cfg(not(target_os = "windows"))]
    {
        vec![dir.join(EXECUTABLE)]
    }
}

/// First match for the executable among the entries of a `PATH`-style value.
pub fn find_in_path(path_var: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .flat_map(|dir| candidates(&dir))
        .find(|candidate| candidate.is_file())
}

/// Well-known install directories, user-level first.
pub fn known_bin_dirs(home: &Path) -> Vec<PathBuf> {
    let mut bins = vec![
        home.join(".opencode").join("bin"),
        home.join(".local").join("bin"),
        home.join(".npm-global").join("bin"),
        home.join(".volta").join("bin"),
        home.join(".bun").join("bin"),
        home.join("bin"),
    ];

    #[cfg(target_os = "windows")]
    {
        if let Some(data) = dirs::data_dir() {
            bins.push(data.join("npm"));
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        bins.push(PathBuf::from("/opt/homebrew/bin"));
        bins.push(PathBuf::from("/usr/local/bin"));
        bins.push(PathBuf::from("/usr/bin"));
    }

    bins.extend(node_version_bins(&home.join(".nvm").join("versions").join("node"), &["bin"]));
    bins.extend(node_version_bins(
        &home.join(".fnm").join("node-versions"),
        &["installation", "bin"],
    ));
    bins
}

/// `<versions_dir>/<version>/<suffix...>` for every installed node version.
fn node_version_bins(versions_dir: &Path, suffix: &[&str]) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(versions_dir) else {
        return Vec::new();
    };
    let mut bins: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .map(|path| suffix.iter().fold(path, |acc, part| acc.join(part)))
        .collect();
    bins.sort();
    bins
}

/// Resolve the executable from `PATH`, then from the known directories.
pub fn resolve_executable(path_var: Option<&OsStr>, home: Option<&Path>) -> Option<PathBuf> {
    if let Some(found) = path_var.and_then(find_in_path) {
        debug!("Found {} in PATH: {:?}", EXECUTABLE, found);
        return Some(found);
    }
    let home = home?;
    known_bin_dirs(home)
        .iter()
        .flat_map(|dir| candidates(dir))
        .find(|candidate| candidate.is_file())
        .inspect(|found| debug!("Found {} at {:?}", EXECUTABLE, found))
}

fn run_version(executable: &Path) -> Option<String> {
    #[cfg(target_os = "windows")]
    let output = {
        let is_script = executable
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("cmd") || ext.eq_ignore_ascii_case("bat"));
        if is_script {
            Command::new("cmd.exe").arg("/C").arg(executable).arg("--version").output()
        } else {
            Command::new(executable).arg("--version").output()
        }
    };
    #[cfg(not(target_os = "windows"))]
    let output = Command::new(executable).arg("--version").output();

    match output {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let raw = if stdout.trim().is_empty() {
                String::from_utf8_lossy(&output.stderr).into_owned()
            } else {
                stdout.into_owned()
            };
            debug!("{} --version output: {}", EXECUTABLE, raw.trim());
            Some(extract_version(&raw))
        }
        Ok(output) => {
            debug!("{} --version exited with {:?}", EXECUTABLE, output.status);
            None
        }
        Err(e) => {
            debug!("Failed to run {} --version: {}", EXECUTABLE, e);
            None
        }
    }
}

/// `(installed, version)` for the current environment.
pub fn detect() -> (bool, Option<String>) {
    let path_var = std::env::var_os("PATH");
    let home = dirs::home_dir();
    let Some(executable) = resolve_executable(path_var.as_deref(), home.as_deref()) else {
        debug!("{} not found", EXECUTABLE);
        return (false, None);
    };
    match run_version(&executable) {
        Some(version) => (true, Some(version)),
        None => (false, None),
    }
}
