use anyhow::Result;
use colored::Colorize;
use validator::Validate;

use antigravity_core::modules::config as core_config;
use antigravity_core::modules::opencode_sync::{self, AccountsRevert, BackupSuffix};
use antigravity_types::models::AppConfig;

use crate::cli::ProxyArgs;

/// Proxy URL from flags, else from the manager's configured port.
pub fn resolve_proxy_url(args: &ProxyArgs, config: &AppConfig) -> String {
    if let Some(url) = args.proxy_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        return url.to_string();
    }
    match args.port {
        Some(port) => format!("http://127.0.0.1:{}", port),
        None => config.proxy.local_url(),
    }
}

/// API key from flags/env, else from the manager settings when they validate.
pub fn resolve_api_key(api_key: Option<String>, config: &AppConfig) -> Result<String> {
    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        return Ok(key);
    }
    if let Err(e) = config.proxy.validate() {
        anyhow::bail!("No API key given and gui_config.json has no usable one ({})", e);
    }
    Ok(config.proxy.api_key.clone())
}

fn load_settings() -> AppConfig {
    core_config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Using default settings: {}", e);
        AppConfig::default()
    })
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars.iter().take(4).collect();
    let tail: String = chars.iter().skip(chars.len() - 4).collect();
    format!("{}...{}", head, tail)
}

pub async fn sync(
    proxy: ProxyArgs,
    api_key: Option<String>,
    accounts: bool,
    models: Vec<String>,
) -> Result<()> {
    let settings = load_settings();
    let proxy_url = resolve_proxy_url(&proxy, &settings);
    let api_key = resolve_api_key(api_key, &settings)?;
    let models = if models.is_empty() { None } else { Some(models) };

    let report = opencode_sync::execute_opencode_sync(
        proxy_url.clone(),
        api_key.clone(),
        Some(accounts),
        models,
    )
    .await
    .map_err(|e| anyhow::anyhow!(e))?;

    println!("{} Synced {} models to {}", "✓".green(), report.model_count, report.config_path.display());
    println!("  Base URL: {}", opencode_sync::normalize_base_url(&proxy_url));
    println!("  API Key: {}", mask_key(&api_key));
    if let Some(backup) = &report.config_backup {
        println!("  Backup: {}", backup.display());
    }
    if let Some(path) = &report.accounts_path {
        if report.exported_accounts == 0 {
            println!("{} No enabled accounts; wrote an empty {}", "!".yellow(), path.display());
        } else {
            println!("{} Exported {} accounts to {}", "✓".green(), report.exported_accounts, path.display());
        }
    }
    Ok(())
}

pub async fn clear(proxy: ProxyArgs, legacy: bool) -> Result<()> {
    let proxy_url = legacy.then(|| resolve_proxy_url(&proxy, &load_settings()));

    let report = opencode_sync::execute_opencode_clear(proxy_url, Some(legacy))
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    if report.config_changed {
        println!("{} Removed Antigravity Manager from opencode.json", "✓".green());
    } else {
        println!("{}", "Nothing to clear in opencode.json.".yellow());
    }
    match report.accounts {
        AccountsRevert::Untouched => {}
        AccountsRevert::Restored(suffix) => println!(
            "{} Restored antigravity-accounts.json from .{}.bak",
            "✓".green(),
            suffix.as_str()
        ),
        AccountsRevert::Removed => {
            println!("{} Removed antigravity-accounts.json (backup kept)", "✓".green())
        }
    }
    Ok(())
}

pub async fn restore() -> Result<()> {
    let report = opencode_sync::execute_opencode_restore()
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    let describe = |suffix: Option<BackupSuffix>| match suffix {
        Some(suffix) => format!("restored from .{}.bak", suffix.as_str()).green(),
        None => "no backup".yellow(),
    };
    println!("{} Restore complete", "✓".green());
    println!("  opencode.json: {}", describe(report.config));
    println!("  antigravity-accounts.json: {}", describe(report.accounts));
    Ok(())
}

pub async fn status(proxy: ProxyArgs, json: bool) -> Result<()> {
    let proxy_url = resolve_proxy_url(&proxy, &load_settings());
    let status = opencode_sync::get_opencode_sync_status(proxy_url.clone())
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let yes_no = |flag: bool| if flag { "yes".green() } else { "no".red() };
    println!("{}", "OpenCode Status".cyan().bold());
    println!(
        "  Installed: {} {}",
        yes_no(status.installed),
        status.version.as_deref().map(|v| format!("({})", v)).unwrap_or_default()
    );
    println!("  Synced with {}: {}", proxy_url, yes_no(status.is_synced));
    println!("  Current base URL: {}", status.current_base_url.as_deref().unwrap_or("-"));
    println!("  Backup: {}", yes_no(status.has_backup));
    if !status.files.is_empty() {
        println!("  Files: {}", status.files.join(", "));
    }
    Ok(())
}

pub async fn show(file: Option<String>) -> Result<()> {
    let content = opencode_sync::get_opencode_config_content(file)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    println!("{}", content);
    Ok(())
}
