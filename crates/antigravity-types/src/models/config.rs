//! Manager settings (`gui_config.json`), read for CLI defaults.
//!
//! Only the fields the sync front end needs are modelled; everything else in
//! the file is ignored on read.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Proxy section of the manager settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ProxyConfig {
    /// Port the proxy listens on
    #[validate(range(min = 1024_u16, max = 65535_u16))]
    #[serde(default = "default_port")]
    pub port: u16,
    /// API key clients present to the proxy
    #[validate(length(min = 1_u64))]
    #[serde(default)]
    pub api_key: String,
    /// Allow LAN access (bind to 0.0.0.0)
    #[serde(default)]
    pub allow_lan_access: bool,
}

fn default_port() -> u16 {
    8045
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self { port: default_port(), api_key: String::new(), allow_lan_access: false }
    }
}

impl ProxyConfig {
    /// Local base URL clients should use.
    pub fn local_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

/// Manager settings root.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub proxy: ProxyConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"language":"en","proxy":{"api_key":"sk-1"}}"#).unwrap();
        assert_eq!(config.proxy.port, 8045);
        assert_eq!(config.proxy.api_key, "sk-1");
        assert_eq!(config.proxy.local_url(), "http://127.0.0.1:8045");
        assert!(config.proxy.validate().is_ok());
    }

    #[test]
    fn test_empty_api_key_fails_validation() {
        assert!(ProxyConfig::default().validate().is_err());
    }
}
