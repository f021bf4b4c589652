//! Resolves where the target tool keeps its configuration.
//!
//! Only the home-directory environment variables are consulted. There is no
//! fallback to password databases or platform APIs: when they are unset the
//! caller gets [`ConfigError::NoHomeDirectory`].

use std::path::{Path, PathBuf};

use antigravity_types::ConfigError;

/// Config directory relative to home, same on every platform.
const OPENCODE_DIR: [&str; 2] = [".config", "opencode"];
pub const OPENCODE_CONFIG_FILE: &str = "opencode.json";
pub const ANTIGRAVITY_CONFIG_FILE: &str = "antigravity.json";
pub const ANTIGRAVITY_ACCOUNTS_FILE: &str = "antigravity-accounts.json";

/// Files the viewer is allowed to read.
pub const VIEWABLE_FILES: [&str; 3] =
    [OPENCODE_CONFIG_FILE, ANTIGRAVITY_CONFIG_FILE, ANTIGRAVITY_ACCOUNTS_FILE];

#[cfg(windows)]
const HOME_VARS: [&str; 2] = ["USERPROFILE", "HOME"];
#[cfg(not(windows))]
const HOME_VARS: [&str; 2] = ["HOME", "USERPROFILE"];

/// Resolve the home directory through `lookup`, platform variable first.
///
/// Empty values count as unset.
pub fn locate_home_with<F>(lookup: F) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    HOME_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Resolve the target tool's config directory from the process environment.
pub fn locate() -> Result<PathBuf, ConfigError> {
    locate_home_with(|var| std::env::var(var).ok()).map(|home| opencode_dir(&home))
}

fn opencode_dir(home: &Path) -> PathBuf {
    OPENCODE_DIR.iter().fold(home.to_path_buf(), |dir, part| dir.join(part))
}

/// Absolute paths of every file the engine manages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpencodePaths {
    pub dir: PathBuf,
    /// `opencode.json`
    pub config: PathBuf,
    /// `antigravity.json` (plugin settings, view only)
    pub plugin_config: PathBuf,
    /// `antigravity-accounts.json`
    pub accounts: PathBuf,
}

impl OpencodePaths {
    /// Paths inside an explicit config directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            config: dir.join(OPENCODE_CONFIG_FILE),
            plugin_config: dir.join(ANTIGRAVITY_CONFIG_FILE),
            accounts: dir.join(ANTIGRAVITY_ACCOUNTS_FILE),
            dir,
        }
    }

    /// Paths under the home directory taken from the environment.
    pub fn locate() -> Result<Self, ConfigError> {
        locate().map(Self::in_dir)
    }

    /// Map a viewer file name to its path; `None` selects `opencode.json`.
    pub fn viewable(&self, name: Option<&str>) -> Result<&Path, ConfigError> {
        match name.unwrap_or(OPENCODE_CONFIG_FILE) {
            OPENCODE_CONFIG_FILE => Ok(&self.config),
            ANTIGRAVITY_CONFIG_FILE => Ok(&self.plugin_config),
            ANTIGRAVITY_ACCOUNTS_FILE => Ok(&self.accounts),
            other => Err(ConfigError::FileNotAllowed { name: other.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_primary_variable_wins() {
        let home = locate_home_with(env(&[(HOME_VARS[0], "/primary"), (HOME_VARS[1], "/other")]));
        assert_eq!(home.unwrap(), PathBuf::from("/primary"));
    }

    #[test]
    fn test_empty_primary_falls_through_to_secondary() {
        let home = locate_home_with(env(&[(HOME_VARS[0], ""), (HOME_VARS[1], "/other")]));
        assert_eq!(home.unwrap(), PathBuf::from("/other"));
    }

    #[test]
    fn test_missing_or_empty_fails() {
        assert_eq!(locate_home_with(env(&[])), Err(ConfigError::NoHomeDirectory));
        assert_eq!(
            locate_home_with(env(&[("HOME", ""), ("USERPROFILE", "")])),
            Err(ConfigError::NoHomeDirectory)
        );
    }

    #[test]
    fn test_paths_layout() {
        let paths = OpencodePaths::in_dir(opencode_dir(Path::new("/home/u")));
        assert_eq!(paths.config, PathBuf::from("/home/u/.config/opencode/opencode.json"));
        assert_eq!(
            paths.accounts,
            PathBuf::from("/home/u/.config/opencode/antigravity-accounts.json")
        );
    }

    #[test]
    fn test_viewer_allowlist() {
        let paths = OpencodePaths::in_dir("/x");
        assert_eq!(paths.viewable(None).unwrap(), Path::new("/x/opencode.json"));
        assert_eq!(
            paths.viewable(Some("antigravity.json")).unwrap(),
            Path::new("/x/antigravity.json")
        );
        assert!(matches!(
            paths.viewable(Some("../secrets")),
            Err(ConfigError::FileNotAllowed { .. })
        ));
    }
}
