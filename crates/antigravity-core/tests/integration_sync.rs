#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test; panics are the assertion mechanism")]

use std::fs;
use std::path::Path;

use antigravity_core::modules::account::FileAccountStore;
use antigravity_core::modules::opencode_sync::{
    AccountsRevert, BackupSuffix, ClearOptions, ModelSelection, OpencodePaths, OpencodeSync,
    SyncRequest,
};
use antigravity_types::models::{
    Account, AccountIndex, AccountSummary, AccountsExport, ModelFamily, TokenData,
};
use serde_json::{json, Value};

const PROXY: &str = "http://127.0.0.1:8045";

fn seed_store(data_dir: &Path) {
    let mut index = AccountIndex::new();
    fs::create_dir_all(data_dir.join("accounts")).expect("accounts dir");

    for (id, family, disabled) in [
        ("a", ModelFamily::Claude, false),
        ("b", ModelFamily::Gemini, true),
        ("c", ModelFamily::Gemini, false),
    ] {
        let mut account = Account::new(
            id.to_string(),
            format!("{}@example.com", id),
            family,
            TokenData::from_refresh_token(format!("rt-{}", id)),
        );
        account.disabled = disabled;
        fs::write(
            data_dir.join("accounts").join(format!("{}.json", id)),
            serde_json::to_string_pretty(&account).expect("serialize account"),
        )
        .expect("write account");
        index.accounts.push(AccountSummary::from(&account));
    }
    index.current_account_id = Some("a".to_string());
    fs::write(
        data_dir.join("accounts.json"),
        serde_json::to_string_pretty(&index).expect("serialize index"),
    )
    .expect("write index");
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read")).expect("parse")
}

#[test]
fn test_full_sync_clear_restore_cycle() {
    let home = tempfile::tempdir().expect("tempdir");
    let data_dir = home.path().join(".antigravity_tools");
    let config_dir = home.path().join(".config").join("opencode");
    seed_store(&data_dir);
    fs::create_dir_all(&config_dir).expect("config dir");

    let user_config = json!({
        "$schema": "https://opencode.ai/config.json",
        "provider": {"google": {"models": {"x": {}}}}
    });
    fs::write(config_dir.join("opencode.json"), user_config.to_string()).expect("seed config");

    let sync = OpencodeSync::new(OpencodePaths::in_dir(&config_dir), FileAccountStore::new(&data_dir));

    let request = SyncRequest::new(PROXY, "sk-integration").with_accounts(true).with_models(vec![
        ModelSelection::new("m1"),
        ModelSelection::with_variant("claude-opus-4-5-thinking", "high"),
    ]);
    let report = sync.sync(&request).expect("sync");
    assert_eq!(report.exported_accounts, 2);

    let config = read_json(&config_dir.join("opencode.json"));
    assert_eq!(config["$schema"], user_config["$schema"]);
    assert_eq!(config["provider"]["google"], user_config["provider"]["google"]);
    let managed = &config["provider"]["antigravity-manager"];
    assert!(managed["models"]["m1"].is_object());
    assert_eq!(
        managed["models"]["claude-opus-4-5-thinking"]["options"],
        json!({"thinkingBudget": 24576})
    );

    let export: AccountsExport =
        serde_json::from_value(read_json(&config_dir.join("antigravity-accounts.json")))
            .expect("export schema");
    assert_eq!(export.version, 3);
    assert_eq!(export.active_index, 0);
    assert_eq!(export.active_index_by_family.get("claude"), Some(&0));
    assert_eq!(export.active_index_by_family.get("gemini"), Some(&0));

    let status = sync.sync_state(PROXY).expect("status");
    assert_eq!(status, (true, true, Some("http://127.0.0.1:8045/v1".to_string())));

    let cleared = sync.clear(&ClearOptions::default()).expect("clear");
    assert!(cleared.config_changed);
    assert_eq!(cleared.accounts, AccountsRevert::Removed);
    assert_eq!(read_json(&config_dir.join("opencode.json")), user_config);
    assert!(!config_dir.join("antigravity-accounts.json").exists());

    let restored = sync.restore().expect("restore");
    assert_eq!(restored.config, Some(BackupSuffix::Manager));
    assert_eq!(restored.accounts, Some(BackupSuffix::Manager));
    assert_eq!(read_json(&config_dir.join("opencode.json")), user_config);
    assert!(config_dir.join("antigravity-accounts.json").exists());
}

#[test]
fn test_second_export_keeps_plugin_state() {
    let home = tempfile::tempdir().expect("tempdir");
    let data_dir = home.path().join("data");
    let config_dir = home.path().join("opencode");
    seed_store(&data_dir);

    let sync = OpencodeSync::new(OpencodePaths::in_dir(&config_dir), FileAccountStore::new(&data_dir));
    let request = SyncRequest::new(PROXY, "k").with_accounts(true);
    sync.sync(&request).expect("first sync");

    let accounts_path = config_dir.join("antigravity-accounts.json");
    let mut export = read_json(&accounts_path);
    export["accounts"][0]["rateLimitResetTimes"] = json!({"claude": 1_700_000_000_000_i64});
    let added_at = export["accounts"][0]["addedAt"].clone();
    fs::write(&accounts_path, export.to_string()).expect("plugin write");

    sync.sync(&request).expect("second sync");

    let export = read_json(&accounts_path);
    assert_eq!(export["accounts"][0]["rateLimitResetTimes"]["claude"], json!(1_700_000_000_000_i64));
    assert_eq!(export["accounts"][0]["addedAt"], added_at);
}
