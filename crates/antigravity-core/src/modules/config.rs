//! Manager settings (`gui_config.json`) in the data directory.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use antigravity_types::ConfigError;
use tracing::warn;

use crate::error::AppResult;
use crate::models::AppConfig;
use crate::modules::account::get_data_dir;

pub const CONFIG_FILE: &str = "gui_config.json";

/// Load settings from a data directory.
///
/// A missing file gives defaults; an unparseable one is logged and also gives defaults.
pub fn load_config_from(data_dir: &Path) -> AppResult<AppConfig> {
    let config_path = data_dir.join(CONFIG_FILE);

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(ConfigError::read(config_path.display().to_string(), &e).into()),
    };

    match serde_json::from_str(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("Ignoring unreadable {:?}: {}", config_path, e);
            Ok(AppConfig::default())
        }
    }
}

/// Load settings from the default data directory.
pub fn load_config() -> AppResult<AppConfig> {
    load_config_from(&get_data_dir()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.proxy.port, 8045);
    }

    #[test]
    fn test_reads_proxy_section() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"language":"en","proxy":{"port":9100,"api_key":"sk-local","custom_mapping":{}}}"#,
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.proxy.port, 9100);
        assert_eq!(config.proxy.api_key, "sk-local");
        assert_eq!(config.proxy.local_url(), "http://127.0.0.1:9100");
    }

    #[test]
    fn test_corrupt_config_is_lenient() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{{").unwrap();
        assert_eq!(load_config_from(dir.path()).unwrap(), AppConfig::default());
    }
}
