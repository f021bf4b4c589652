//! Variant token resolution.
//!
//! Each [`VariantType`] owns a fixed table of tokens. Budget tables map a
//! token to an integer thinking budget; level tables map a token to the
//! level string of the same name. Lookups are exact and case-sensitive.

use antigravity_types::{ThinkingParam, VariantError, VariantToken, VariantType};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy)]
enum Setting {
    Budget(u32),
    Level,
}

use Setting::{Budget, Level};
use VariantToken::{High, Low, Max, Medium, Minimal};

const CLAUDE_THINKING_BUDGET: &[(VariantToken, Setting)] =
    &[(Low, Budget(8192)), (Medium, Budget(16384)), (High, Budget(24576)), (Max, Budget(32768))];

const GEMINI3_PRO_LEVEL: &[(VariantToken, Setting)] = &[(Low, Level), (High, Level)];

const GEMINI3_FLASH_LEVEL: &[(VariantToken, Setting)] =
    &[(Minimal, Level), (Low, Level), (Medium, Level), (High, Level)];

const GEMINI25_THINKING_BUDGET: &[(VariantToken, Setting)] =
    &[(Low, Budget(8192)), (Medium, Budget(12288)), (High, Budget(16384)), (Max, Budget(24576))];

fn table(variant_type: VariantType) -> &'static [(VariantToken, Setting)] {
    match variant_type {
        VariantType::ClaudeThinkingBudget => CLAUDE_THINKING_BUDGET,
        VariantType::Gemini3ProLevel => GEMINI3_PRO_LEVEL,
        VariantType::Gemini3FlashLevel => GEMINI3_FLASH_LEVEL,
        VariantType::Gemini25ThinkingBudget => GEMINI25_THINKING_BUDGET,
        VariantType::None => &[],
    }
}

fn to_param(token: VariantToken, setting: Setting) -> ThinkingParam {
    match setting {
        Budget(budget) => ThinkingParam::Budget(budget),
        Level => ThinkingParam::Level(token.as_str().to_string()),
    }
}

/// Tokens defined for `variant_type`, in table order.
pub fn supported_tokens(variant_type: VariantType) -> Vec<VariantToken> {
    table(variant_type).iter().map(|(token, _)| *token).collect()
}

/// Resolve a caller-supplied token.
///
/// `Ok(None)` means the variant type emits no parameter (`none` accepts any
/// token). A token missing from a non-empty table is `UnknownVariant`.
pub fn resolve(
    variant_type: VariantType,
    token: &str,
) -> Result<Option<ThinkingParam>, VariantError> {
    if variant_type == VariantType::None {
        return Ok(None);
    }

    table(variant_type)
        .iter()
        .find(|(t, _)| t.as_str() == token)
        .map(|(t, setting)| Some(to_param(*t, *setting)))
        .ok_or_else(|| VariantError::UnknownVariant {
            variant_type: variant_type.as_str().to_string(),
            token: token.to_string(),
        })
}

/// Provider parameters the target tool applies when a variant is picked.
fn variant_body(param: &ThinkingParam) -> Value {
    match param {
        ThinkingParam::Budget(budget) => json!({
            "thinkingConfig": { "thinkingBudget": budget },
            "thinking": { "type": "enabled", "budget_tokens": budget }
        }),
        ThinkingParam::Level(level) => json!({ "thinkingLevel": level }),
    }
}

/// Full `variants` object for a model entry, `None` when the type has no table.
pub fn variants_object(variant_type: VariantType) -> Option<Value> {
    let entries = table(variant_type);
    if entries.is_empty() {
        return None;
    }

    let variants: Map<String, Value> = entries
        .iter()
        .map(|(token, setting)| {
            (token.as_str().to_string(), variant_body(&to_param(*token, *setting)))
        })
        .collect();
    Some(Value::Object(variants))
}
