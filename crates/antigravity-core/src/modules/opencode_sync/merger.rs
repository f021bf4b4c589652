//! Non-destructive merge of the managed provider into `opencode.json`.
//!
//! The document is handled as a generic JSON tree. Sync replaces exactly one
//! subtree, `provider["antigravity-manager"]`, and writes the whole tree
//! back. Every other top-level key and every other provider is left as read.

use std::str::FromStr;

use serde_json::{json, Map, Value};
use tracing::warn;

use super::catalog::ModelCatalog;
use super::variant;

pub const MANAGED_PROVIDER_ID: &str = "antigravity-manager";
pub const MANAGED_PROVIDER_NPM: &str = "@ai-sdk/anthropic";
pub const MANAGED_PROVIDER_NAME: &str = "Antigravity Manager";

/// Providers older releases wrote catalog models into.
pub const LEGACY_PROVIDER_IDS: [&str; 2] = ["anthropic", "google"];

/// Trim whitespace and trailing `/`, then make sure the URL ends in `/v1`.
pub fn normalize_base_url(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.ends_with("/v1") {
        trimmed.to_string()
    } else {
        format!("{}/v1", trimmed)
    }
}

/// Compare two base URLs after normalization.
pub fn base_url_matches(config_url: &str, proxy_url: &str) -> bool {
    normalize_base_url(config_url) == normalize_base_url(proxy_url)
}

/// Lenient parse used by sync: anything that is not a JSON object becomes `{}`.
pub fn parse_document_lenient(raw: Option<&str>) -> Value {
    let Some(raw) = raw else {
        return json!({});
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(value) if value.is_object() => value,
        Ok(_) => {
            warn!("opencode.json is not a JSON object, starting from an empty document");
            json!({})
        }
        Err(e) => {
            warn!("opencode.json is not valid JSON ({}), starting from an empty document", e);
            json!({})
        }
    }
}

/// One requested model, optionally pinned to a variant token (`id` or `id:variant`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub id: String,
    pub variant: Option<String>,
}

impl ModelSelection {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), variant: None }
    }

    pub fn with_variant(id: impl Into<String>, variant: impl Into<String>) -> Self {
        Self { id: id.into(), variant: Some(variant.into()) }
    }
}

impl FromStr for ModelSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (id, variant) = match s.split_once(':') {
            Some((id, variant)) => (id.trim(), Some(variant.trim())),
            None => (s, None),
        };
        if id.is_empty() {
            return Err(format!("empty model id in '{}'", s));
        }
        Ok(Self {
            id: id.to_string(),
            variant: variant.filter(|v| !v.is_empty()).map(str::to_string),
        })
    }
}

/// Options for [`ConfigMerger::apply_clear`].
#[derive(Debug, Clone, Default)]
pub struct ClearOptions {
    /// Proxy URL; legacy cleanup only touches options pointing at it
    pub proxy_url: Option<String>,
    /// Also strip catalog models this engine once wrote into legacy providers
    pub clear_legacy: bool,
}

/// Builds and applies the managed provider block.
#[derive(Debug, Clone, Copy)]
pub struct ConfigMerger<'a> {
    catalog: &'a ModelCatalog,
}

impl<'a> ConfigMerger<'a> {
    pub fn new(catalog: &'a ModelCatalog) -> Self {
        Self { catalog }
    }

    /// Model entry: catalog metadata plus optional pinned `options`.
    pub fn build_model_entry(&self, selection: &ModelSelection) -> Value {
        let mut entry = Map::new();
        let variant_type = match self.catalog.get(&selection.id) {
            Some(model) => {
                entry.insert("name".to_string(), json!(model.name));
                entry.insert("limit".to_string(), json!(model.limit));
                entry.insert("modalities".to_string(), json!(model.modalities));
                if model.reasoning {
                    entry.insert("reasoning".to_string(), Value::Bool(true));
                }
                if let Some(variants) = variant::variants_object(model.variant_type) {
                    entry.insert("variants".to_string(), variants);
                }
                model.variant_type
            }
            None => {
                entry.insert("name".to_string(), json!(selection.id));
                antigravity_types::VariantType::None
            }
        };

        if let Some(token) = selection.variant.as_deref() {
            match variant::resolve(variant_type, token) {
                Ok(Some(param)) => {
                    entry.insert("options".to_string(), json!(param));
                }
                Ok(None) => {}
                Err(e) => warn!("{} ({}); writing model without it", e, selection.id),
            }
        }

        Value::Object(entry)
    }

    /// Fresh managed provider object.
    pub fn build_provider(
        &self,
        api_key: &str,
        base_url: &str,
        models: &[ModelSelection],
    ) -> Value {
        let models: Map<String, Value> = models
            .iter()
            .map(|selection| (selection.id.clone(), self.build_model_entry(selection)))
            .collect();

        json!({
            "npm": MANAGED_PROVIDER_NPM,
            "name": MANAGED_PROVIDER_NAME,
            "options": {
                "baseURL": normalize_base_url(base_url),
                "apiKey": api_key,
            },
            "models": models,
        })
    }

    /// Replace `provider["antigravity-manager"]` wholesale and keep everything else.
    pub fn apply_sync(
        &self,
        mut doc: Value,
        api_key: &str,
        base_url: &str,
        models: &[ModelSelection],
    ) -> Value {
        if !doc.is_object() {
            doc = json!({});
        }
        let provider_block = self.build_provider(api_key, base_url, models);

        let Some(root) = doc.as_object_mut() else {
            return doc;
        };
        let provider = root.entry("provider").or_insert_with(|| json!({}));
        if !provider.is_object() {
            warn!("`provider` is not an object, replacing it");
            *provider = json!({});
        }
        if let Some(provider) = provider.as_object_mut() {
            provider.insert(MANAGED_PROVIDER_ID.to_string(), provider_block);
        }
        doc
    }

    /// Remove the managed provider; optionally clean legacy providers.
    ///
    /// Legacy provider keys themselves are never removed.
    pub fn apply_clear(&self, mut doc: Value, options: &ClearOptions) -> Value {
        let Some(root) = doc.as_object_mut() else {
            return doc;
        };
        let Some(provider) = root.get_mut("provider").and_then(Value::as_object_mut) else {
            return doc;
        };

        let removed = provider.remove(MANAGED_PROVIDER_ID).is_some();

        if options.clear_legacy {
            match options.proxy_url.as_deref() {
                Some(proxy_url) => {
                    for id in LEGACY_PROVIDER_IDS {
                        if let Some(legacy) = provider.get_mut(id) {
                            self.cleanup_legacy_provider(legacy, proxy_url);
                        }
                    }
                }
                None => warn!("Legacy cleanup requested without a proxy URL, skipping"),
            }
        }

        if removed && provider.is_empty() {
            root.remove("provider");
        }
        doc
    }

    fn cleanup_legacy_provider(&self, provider: &mut Value, proxy_url: &str) {
        let Some(provider_obj) = provider.as_object_mut() else {
            return;
        };

        let drop_models = match provider_obj.get_mut("models").and_then(Value::as_object_mut) {
            Some(models) => {
                for id in self.catalog.ids() {
                    models.remove(id);
                }
                models.is_empty()
            }
            None => false,
        };
        if drop_models {
            provider_obj.remove("models");
        }

        let drop_options = match provider_obj.get_mut("options").and_then(Value::as_object_mut) {
            Some(options) => {
                let points_at_proxy = options
                    .get("baseURL")
                    .and_then(Value::as_str)
                    .is_some_and(|url| base_url_matches(url, proxy_url));
                if points_at_proxy {
                    options.remove("baseURL");
                    options.remove("apiKey");
                }
                options.is_empty()
            }
            None => false,
        };
        if drop_options {
            provider_obj.remove("options");
        }
    }
}

/// `(baseURL, has apiKey)` of the managed provider, if present.
pub fn managed_provider_endpoint(doc: &Value) -> Option<(&str, bool)> {
    let options = doc.get("provider")?.get(MANAGED_PROVIDER_ID)?.get("options")?;
    let base_url = options.get("baseURL")?.as_str()?;
    let has_key = options.get("apiKey").and_then(Value::as_str).is_some();
    Some((base_url, has_key))
}

/// Number of models under the managed provider.
pub fn managed_model_count(doc: &Value) -> usize {
    doc.get("provider")
        .and_then(|p| p.get(MANAGED_PROVIDER_ID))
        .and_then(|p| p.get("models"))
        .and_then(Value::as_object)
        .map_or(0, |models| models.len())
}

#[cfg(test)]
#[path = "merger_tests.rs"]
mod tests;
