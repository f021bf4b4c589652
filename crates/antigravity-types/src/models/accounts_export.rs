//! Accounts export document (`antigravity-accounts.json`, schema v3).
//!
//! The file is shared with the target tool's auth plugin, which keeps its own
//! per-account runtime state in it. Fields this side does not own are kept in
//! [`ExportedAccount::plugin_state`] and written back untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Current export schema version.
pub const ACCOUNTS_EXPORT_VERSION: i32 = 3;

/// One exported account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Milliseconds since epoch when the plugin first saw this account
    #[serde(default)]
    pub added_at: i64,
    /// Milliseconds since epoch of last use
    #[serde(default)]
    pub last_used: i64,
    /// Plugin-owned state (cooldowns, rate-limit resets, fingerprints, cached quota)
    #[serde(flatten)]
    pub plugin_state: Map<String, Value>,
}

/// Whole export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsExport {
    #[serde(default)]
    pub version: i32,
    #[serde(default)]
    pub accounts: Vec<ExportedAccount>,
    /// Index into `accounts`, or -1 when empty
    #[serde(default)]
    pub active_index: i32,
    /// Family name to index within that family's accounts
    #[serde(default)]
    pub active_index_by_family: BTreeMap<String, i32>,
}

impl AccountsExport {
    /// Empty v3 document.
    pub fn empty() -> Self {
        Self {
            version: ACCOUNTS_EXPORT_VERSION,
            accounts: Vec::new(),
            active_index: -1,
            active_index_by_family: BTreeMap::new(),
        }
    }
}
