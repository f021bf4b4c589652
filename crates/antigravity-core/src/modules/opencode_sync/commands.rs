//! Async command boundary for the presentation layer.
//!
//! Each command runs the blocking engine on the tokio blocking pool and
//! flattens every failure to its display string.

use antigravity_types::OpencodeStatus;

use super::merger::{ClearOptions, ModelSelection};
use super::orchestrator::{ClearReport, OpencodeSync, RestoreReport, SyncReport, SyncRequest};
use crate::error::AppResult;

async fn run_blocking<T, F>(op: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce() -> AppResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| format!("Task join error: {}", e))?
        .map_err(|e| e.to_string())
}

/// Parse `id` / `id:variant` selections, rejecting empty ids.
pub fn parse_model_selections(models: &[String]) -> Result<Vec<ModelSelection>, String> {
    models.iter().map(|m| m.parse::<ModelSelection>()).collect()
}

pub async fn execute_opencode_sync(
    proxy_url: String,
    api_key: String,
    sync_accounts: Option<bool>,
    models: Option<Vec<String>>,
) -> Result<SyncReport, String> {
    let models = models.as_deref().map(parse_model_selections).transpose()?;
    let mut request = SyncRequest::new(proxy_url, api_key).with_accounts(sync_accounts.unwrap_or(false));
    if let Some(models) = models {
        request = request.with_models(models);
    }
    run_blocking(move || OpencodeSync::from_env()?.sync(&request)).await
}

pub async fn execute_opencode_clear(
    proxy_url: Option<String>,
    clear_legacy: Option<bool>,
) -> Result<ClearReport, String> {
    let options = ClearOptions { proxy_url, clear_legacy: clear_legacy.unwrap_or(false) };
    run_blocking(move || OpencodeSync::from_env()?.clear(&options)).await
}

pub async fn execute_opencode_restore() -> Result<RestoreReport, String> {
    run_blocking(|| OpencodeSync::from_env()?.restore()).await
}

pub async fn get_opencode_sync_status(proxy_url: String) -> Result<OpencodeStatus, String> {
    run_blocking(move || OpencodeSync::from_env()?.status(&proxy_url)).await
}

pub async fn get_opencode_config_content(file_name: Option<String>) -> Result<String, String> {
    run_blocking(move || OpencodeSync::from_env()?.read_file(file_name.as_deref())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_selections() {
        let parsed =
            parse_model_selections(&["gemini-3-flash".to_string(), "claude-opus-4-5-thinking:max".to_string()])
                .unwrap();
        assert_eq!(parsed[0], ModelSelection::new("gemini-3-flash"));
        assert_eq!(parsed[1], ModelSelection::with_variant("claude-opus-4-5-thinking", "max"));

        assert!(parse_model_selections(&[":low".to_string()]).is_err());
    }

    #[tokio::test]
    async fn test_blocking_errors_become_strings() {
        let err = run_blocking(|| -> AppResult<()> {
            Err(antigravity_types::ConfigError::NoHomeDirectory.into())
        })
        .await
        .unwrap_err();
        assert!(err.contains("home directory"));
    }
}
