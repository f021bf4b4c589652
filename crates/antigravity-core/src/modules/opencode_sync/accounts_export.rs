//! Builds `antigravity-accounts.json` (schema v3) from the live account set.

use antigravity_types::{
    Account, AccountError, AccountsExport, ExportedAccount, ModelFamily,
};
use tracing::{debug, warn};

/// Produces the accounts export, carrying plugin state over from the previous file.
#[derive(Debug, Clone)]
pub struct AccountsExporter {
    previous: Option<AccountsExport>,
    now_ms: i64,
}

impl AccountsExporter {
    pub fn new(previous: Option<AccountsExport>) -> Self {
        Self::with_clock(previous, chrono::Utc::now().timestamp_millis())
    }

    /// Exporter with a fixed "now" in milliseconds.
    pub fn with_clock(previous: Option<AccountsExport>, now_ms: i64) -> Self {
        Self { previous, now_ms }
    }

    /// Parse the previous export. Missing or unreadable content yields `None`.
    pub fn parse_previous(raw: Option<&str>) -> Option<AccountsExport> {
        let raw = raw?;
        match serde_json::from_str::<AccountsExport>(raw) {
            Ok(previous) => Some(previous),
            Err(e) => {
                warn!("Ignoring unreadable previous accounts export: {}", e);
                None
            }
        }
    }

    /// Export enabled accounts in their original order.
    ///
    /// `active_account_id` is the store's current account; when it is not among
    /// the enabled accounts the previous file's selection is reused, per family too.
    /// Accounts without a recorded family count toward every tracked family.
    pub fn export(&self, accounts: &[Account], active_account_id: Option<&str>) -> AccountsExport {
        let enabled: Vec<&Account> = accounts.iter().filter(|a| a.is_enabled()).collect();

        let mut export = AccountsExport::empty();
        for family in ModelFamily::TRACKED {
            export.active_index_by_family.insert(family.as_str().to_string(), 0);
        }

        if enabled.is_empty() {
            warn!("{}; writing an empty accounts export", AccountError::NoEnabledAccounts);
            return export;
        }

        export.accounts = enabled.iter().map(|account| self.export_account(account)).collect();

        let (active, from_store) = self.resolve_active(&enabled, active_account_id);
        export.active_index = to_index(active);

        for family in ModelFamily::TRACKED {
            let members: Vec<usize> = enabled
                .iter()
                .enumerate()
                .filter(|(_, a)| a.serves(family))
                .map(|(i, _)| i)
                .collect();
            let own = members.iter().position(|&i| i == active);
            let previous = self.previous_family_index(family, members.len());
            let index = (if from_store { own.or(previous) } else { previous.or(own) }).unwrap_or(0);
            export.active_index_by_family.insert(family.as_str().to_string(), to_index(index));
        }

        debug!(
            "Exported {} of {} accounts, active index {}",
            export.accounts.len(),
            accounts.len(),
            export.active_index
        );
        export
    }

    /// Active position, and whether the store picked it.
    fn resolve_active(&self, enabled: &[&Account], active_account_id: Option<&str>) -> (usize, bool) {
        if let Some(i) = active_account_id.and_then(|id| enabled.iter().position(|a| a.id == id)) {
            return (i, true);
        }
        let fallback = self
            .previous
            .as_ref()
            .map(|previous| clamp(previous.active_index, enabled.len()))
            .unwrap_or(0);
        (fallback, false)
    }

    fn previous_family_index(&self, family: ModelFamily, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let previous = self.previous.as_ref()?;
        let index = previous.active_index_by_family.get(family.as_str())?;
        Some(clamp(*index, len))
    }

    fn find_previous(&self, account: &Account) -> Option<&ExportedAccount> {
        let previous = self.previous.as_ref()?;
        let refresh_token = account.token.refresh_token.as_str();
        previous
            .accounts
            .iter()
            .find(|p| !refresh_token.is_empty() && p.refresh_token == refresh_token)
            .or_else(|| {
                previous.accounts.iter().find(|p| {
                    !account.email.is_empty() && p.email.as_deref() == Some(account.email.as_str())
                })
            })
    }

    fn export_account(&self, account: &Account) -> ExportedAccount {
        let last_used = account.last_used.saturating_mul(1000);
        let mut exported = ExportedAccount {
            email: Some(account.email.clone()).filter(|e| !e.is_empty()),
            refresh_token: account.token.refresh_token.clone(),
            project_id: account.token.project_id.clone(),
            added_at: self.now_ms,
            last_used,
            plugin_state: serde_json::Map::new(),
        };

        if let Some(previous) = self.find_previous(account) {
            if previous.added_at > 0 {
                exported.added_at = previous.added_at;
            }
            exported.last_used = last_used.max(previous.last_used);
            if exported.project_id.is_none() {
                exported.project_id = previous.project_id.clone();
            }
            exported.plugin_state = previous.plugin_state.clone();
        }
        exported
    }
}

/// Clamp a possibly negative stored index into `[0, len - 1]`.
fn clamp(index: i32, len: usize) -> usize {
    let max = len.saturating_sub(1);
    usize::try_from(index).map_or(0, |i| i.min(max))
}

fn to_index(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use antigravity_types::TokenData;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000_000;

    fn account(id: &str, family: ModelFamily, enabled: bool) -> Account {
        let mut token = TokenData::from_refresh_token(format!("rt-{}", id));
        token.project_id = Some(format!("proj-{}", id));
        let mut account = Account::new(id.to_string(), format!("{}@example.com", id), family, token);
        account.disabled = !enabled;
        account.last_used = 1_000;
        account
    }

    fn shared(id: &str) -> Account {
        let mut account = account(id, ModelFamily::Claude, true);
        account.family = None;
        account
    }

    fn previous_selection(active_index: i32, claude: i32, gemini: i32) -> AccountsExport {
        AccountsExport {
            version: 3,
            accounts: Vec::new(),
            active_index,
            active_index_by_family: [("claude".to_string(), claude), ("gemini".to_string(), gemini)]
                .into_iter()
                .collect(),
        }
    }

    fn emails(export: &AccountsExport) -> Vec<&str> {
        export.accounts.iter().filter_map(|a| a.email.as_deref()).collect()
    }

    #[test]
    fn test_export_skips_disabled_and_indexes_families() {
        let accounts = vec![
            account("a", ModelFamily::Claude, true),
            account("b", ModelFamily::Gemini, false),
            account("c", ModelFamily::Gemini, true),
        ];

        let export = AccountsExporter::with_clock(None, NOW).export(&accounts, Some("a"));

        assert_eq!(export.version, 3);
        assert_eq!(emails(&export), vec!["a@example.com", "c@example.com"]);
        assert_eq!(export.active_index, 0);
        assert_eq!(export.active_index_by_family.get("claude"), Some(&0));
        assert_eq!(export.active_index_by_family.get("gemini"), Some(&0));
    }

    #[test]
    fn test_active_account_index_within_family() {
        let accounts = vec![
            account("g1", ModelFamily::Gemini, true),
            account("c1", ModelFamily::Claude, true),
            account("g2", ModelFamily::Gemini, true),
        ];

        let export = AccountsExporter::with_clock(None, NOW).export(&accounts, Some("g2"));

        assert_eq!(export.active_index, 2);
        assert_eq!(export.active_index_by_family["gemini"], 1);
        assert_eq!(export.active_index_by_family["claude"], 0);
    }

    #[test]
    fn test_empty_export_is_soft() {
        let accounts = vec![account("a", ModelFamily::Claude, false)];

        let export = AccountsExporter::with_clock(None, NOW).export(&accounts, Some("a"));

        assert!(export.accounts.is_empty());
        assert_eq!(export.active_index, -1);
        assert_eq!(export.active_index_by_family["claude"], 0);
        assert_eq!(export.active_index_by_family["gemini"], 0);
    }

    #[test]
    fn test_proxy_disabled_accounts_are_excluded() {
        let mut hidden = account("h", ModelFamily::Claude, true);
        hidden.proxy_disabled = true;
        let accounts = vec![hidden, account("v", ModelFamily::Claude, true)];

        let export = AccountsExporter::with_clock(None, NOW).export(&accounts, None);

        assert_eq!(emails(&export), vec!["v@example.com"]);
        assert_eq!(export.active_index, 0);
    }

    #[test]
    fn test_unknown_family_exported_but_not_indexed() {
        let accounts = vec![
            account("u", ModelFamily::Unknown, true),
            account("c", ModelFamily::Claude, true),
        ];

        let export = AccountsExporter::with_clock(None, NOW).export(&accounts, Some("u"));

        assert_eq!(export.accounts.len(), 2);
        assert_eq!(export.active_index, 0);
        assert_eq!(export.active_index_by_family.len(), 2);
        assert!(!export.active_index_by_family.contains_key("unknown"));
    }

    #[test]
    fn test_previous_selection_is_clamped() {
        let previous = AccountsExport {
            version: 3,
            accounts: Vec::new(),
            active_index: 7,
            active_index_by_family: [("claude".to_string(), 5), ("gemini".to_string(), -2)]
                .into_iter()
                .collect(),
        };
        let accounts = vec![
            account("c1", ModelFamily::Claude, true),
            account("c2", ModelFamily::Claude, true),
            account("g1", ModelFamily::Gemini, true),
        ];

        let export = AccountsExporter::with_clock(Some(previous), NOW).export(&accounts, Some("gone"));

        assert_eq!(export.active_index, 2);
        assert_eq!(export.active_index_by_family["gemini"], 0);
        assert_eq!(export.active_index_by_family["claude"], 1);
    }

    #[test]
    fn test_familyless_accounts_serve_both_families() {
        let accounts = vec![shared("a"), shared("b"), shared("c")];

        let export = AccountsExporter::with_clock(Some(previous_selection(0, 2, 1)), NOW)
            .export(&accounts, Some("c"));

        assert_eq!(export.active_index, 2);
        assert_eq!(export.active_index_by_family["claude"], 2);
        assert_eq!(export.active_index_by_family["gemini"], 2);
    }

    #[test]
    fn test_previous_family_selection_kept_without_store_choice() {
        let accounts = vec![shared("a"), shared("b"), shared("c")];

        let export = AccountsExporter::with_clock(Some(previous_selection(1, 2, 0)), NOW)
            .export(&accounts, None);

        assert_eq!(export.active_index, 1);
        assert_eq!(export.active_index_by_family["claude"], 2);
        assert_eq!(export.active_index_by_family["gemini"], 0);
    }

    #[test]
    fn test_plugin_state_carried_forward() {
        let previous: AccountsExport = serde_json::from_value(json!({
            "version": 3,
            "accounts": [{
                "email": "old-address@example.com",
                "refreshToken": "rt-a",
                "addedAt": 42,
                "lastUsed": 9_999_999,
                "rateLimitResetTimes": {"claude": 123},
                "coolingDownUntil": 77
            }, {
                "email": "c@example.com",
                "refreshToken": "rotated",
                "addedAt": 43,
                "lastUsed": 1
            }],
            "activeIndex": 0,
            "activeIndexByFamily": {"claude": 0, "gemini": 0}
        }))
        .unwrap();
        let accounts = vec![
            account("a", ModelFamily::Claude, true),
            account("c", ModelFamily::Gemini, true),
            account("n", ModelFamily::Gemini, true),
        ];

        let export = AccountsExporter::with_clock(Some(previous), NOW).export(&accounts, Some("a"));

        let a = &export.accounts[0];
        assert_eq!(a.added_at, 42);
        assert_eq!(a.last_used, 9_999_999);
        assert_eq!(a.email.as_deref(), Some("a@example.com"));
        assert_eq!(a.plugin_state.get("coolingDownUntil"), Some(&json!(77)));

        let c = &export.accounts[1];
        assert_eq!(c.added_at, 43);
        assert_eq!(c.refresh_token, "rt-c");
        assert_eq!(c.last_used, 1_000_000);

        let n = &export.accounts[2];
        assert_eq!(n.added_at, NOW);
        assert!(n.plugin_state.is_empty());
        assert_eq!(n.project_id.as_deref(), Some("proj-n"));
    }

    #[test]
    fn test_parse_previous_is_lenient() {
        assert!(AccountsExporter::parse_previous(None).is_none());
        assert!(AccountsExporter::parse_previous(Some("not json")).is_none());

        let parsed = AccountsExporter::parse_previous(Some(r#"{"accounts":[]}"#)).unwrap();
        assert!(parsed.accounts.is_empty());
        assert_eq!(parsed.active_index, 0);
    }
}
