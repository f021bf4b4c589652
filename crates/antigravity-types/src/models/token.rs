//! Credential payload carried by an account.

use serde::{Deserialize, Serialize};

/// OAuth token data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenData {
    /// OAuth access token
    #[serde(default)]
    pub access_token: String,
    /// OAuth refresh token; the export keys accounts on this
    pub refresh_token: String,
    /// Token validity duration in seconds
    #[serde(default)]
    pub expires_in: i64,
    /// Absolute timestamp when token expires
    #[serde(default)]
    pub expiry_timestamp: i64,
    /// Token type (usually "Bearer")
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Email associated with the token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Google Cloud project ID for API requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl TokenData {
    /// Token data holding only a refresh token, as imported from a plugin file.
    pub fn from_refresh_token(refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: String::new(),
            refresh_token: refresh_token.into(),
            expires_in: 0,
            expiry_timestamp: 0,
            token_type: default_token_type(),
            email: None,
            project_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_token_deserializes() {
        let token: TokenData =
            serde_json::from_str(r#"{"refresh_token":"1//abc","project_id":"p-1"}"#).unwrap();
        assert_eq!(token.refresh_token, "1//abc");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.project_id.as_deref(), Some("p-1"));
    }
}
