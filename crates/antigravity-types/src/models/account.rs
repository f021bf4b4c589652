//! Account model and the on-disk account index.

use super::{ModelFamily, TokenData};
use serde::{Deserialize, Serialize};

/// Account data structure representing one upstream credential.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Unique identifier for the account
    pub id: String,
    /// Email address associated with the account
    pub email: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Authentication token data
    pub token: TokenData,
    /// Vendor family this credential is limited to; `None` serves every family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<ModelFamily>,
    /// Whether the account is disabled globally
    #[serde(default)]
    pub disabled: bool,
    /// Reason for global disable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<String>,
    /// Whether the account is disabled for proxy use only
    #[serde(default)]
    pub proxy_disabled: bool,
    /// Reason for proxy disable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_disabled_reason: Option<String>,
    /// Timestamp when account was created
    #[serde(default)]
    pub created_at: i64,
    /// Timestamp when account was last used
    #[serde(default)]
    pub last_used: i64,
}

impl Account {
    /// Create a new enabled account with the given ID, email, and token.
    pub fn new(id: String, email: String, family: ModelFamily, token: TokenData) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id,
            email,
            name: None,
            token,
            family: Some(family),
            disabled: false,
            disabled_reason: None,
            proxy_disabled: false,
            proxy_disabled_reason: None,
            created_at: now,
            last_used: now,
        }
    }

    /// Enabled means usable by the proxy: neither globally nor proxy-disabled.
    pub const fn is_enabled(&self) -> bool {
        !self.disabled && !self.proxy_disabled
    }

    /// Whether this account takes part in `family`'s rotation.
    pub fn serves(&self, family: ModelFamily) -> bool {
        self.family.map_or(true, |own| own == family)
    }
}

/// Account index data structure (accounts.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountIndex {
    /// Schema version
    pub version: String,
    /// List of account summaries
    pub accounts: Vec<AccountSummary>,
    /// Currently active account ID
    #[serde(default)]
    pub current_account_id: Option<String>,
}

impl AccountIndex {
    /// Create a new empty account index.
    pub fn new() -> Self {
        Self { version: "2.0".to_string(), accounts: Vec::new(), current_account_id: None }
    }
}

impl Default for AccountIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Account summary for the index file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Unique identifier
    pub id: String,
    /// Email address
    pub email: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: i64,
    /// Last used timestamp
    #[serde(default)]
    pub last_used: i64,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            email: account.email.clone(),
            name: account.name.clone(),
            created_at: account.created_at,
            last_used: account.last_used,
        }
    }
}
