//! Built-in model catalog served by the proxy.

use antigravity_types::{
    ModelCatalogEntry, ModelFamily, ModelLimits, ModelModalities, VariantType,
};

const CLAUDE_CONTEXT: u32 = 200_000;
const CLAUDE_OUTPUT: u32 = 64_000;
const GEMINI_CONTEXT: u32 = 1_048_576;

const TEXT_IMAGE_PDF: &[&str] = &["text", "image", "pdf"];
const TEXT: &[&str] = &["text"];
const TEXT_IMAGE: &[&str] = &["text", "image"];

struct Builtin {
    id: &'static str,
    name: &'static str,
    family: ModelFamily,
    variant_type: VariantType,
    output_limit: u32,
    output_modalities: &'static [&'static str],
    reasoning: bool,
}

const BUILTIN: &[Builtin] = &[
    Builtin {
        id: "claude-sonnet-4-5",
        name: "Claude Sonnet 4.5",
        family: ModelFamily::Claude,
        variant_type: VariantType::None,
        output_limit: CLAUDE_OUTPUT,
        output_modalities: TEXT,
        reasoning: false,
    },
    Builtin {
        id: "claude-sonnet-4-5-thinking",
        name: "Claude Sonnet 4.5 Thinking",
        family: ModelFamily::Claude,
        variant_type: VariantType::ClaudeThinkingBudget,
        output_limit: CLAUDE_OUTPUT,
        output_modalities: TEXT,
        reasoning: true,
    },
    Builtin {
        id: "claude-opus-4-5-thinking",
        name: "Claude Opus 4.5 Thinking",
        family: ModelFamily::Claude,
        variant_type: VariantType::ClaudeThinkingBudget,
        output_limit: CLAUDE_OUTPUT,
        output_modalities: TEXT,
        reasoning: true,
    },
    Builtin {
        id: "gemini-3-pro-high",
        name: "Gemini 3 Pro High",
        family: ModelFamily::Gemini,
        variant_type: VariantType::Gemini3ProLevel,
        output_limit: 65_535,
        output_modalities: TEXT_IMAGE,
        reasoning: true,
    },
    Builtin {
        id: "gemini-3-pro-low",
        name: "Gemini 3 Pro Low",
        family: ModelFamily::Gemini,
        variant_type: VariantType::Gemini3ProLevel,
        output_limit: 65_535,
        output_modalities: TEXT_IMAGE,
        reasoning: true,
    },
    Builtin {
        id: "gemini-3-flash",
        name: "Gemini 3 Flash",
        family: ModelFamily::Gemini,
        variant_type: VariantType::Gemini3FlashLevel,
        output_limit: 65_536,
        output_modalities: TEXT,
        reasoning: true,
    },
    Builtin {
        id: "gemini-3-pro-image",
        name: "Gemini 3 Pro Image",
        family: ModelFamily::Gemini,
        variant_type: VariantType::None,
        output_limit: 65_535,
        output_modalities: TEXT_IMAGE,
        reasoning: false,
    },
    Builtin {
        id: "gemini-2.5-flash",
        name: "Gemini 2.5 Flash",
        family: ModelFamily::Gemini,
        variant_type: VariantType::None,
        output_limit: 65_536,
        output_modalities: TEXT,
        reasoning: false,
    },
    Builtin {
        id: "gemini-2.5-flash-lite",
        name: "Gemini 2.5 Flash Lite",
        family: ModelFamily::Gemini,
        variant_type: VariantType::None,
        output_limit: 65_536,
        output_modalities: TEXT,
        reasoning: false,
    },
    Builtin {
        id: "gemini-2.5-flash-thinking",
        name: "Gemini 2.5 Flash Thinking",
        family: ModelFamily::Gemini,
        variant_type: VariantType::Gemini25ThinkingBudget,
        output_limit: 65_536,
        output_modalities: TEXT,
        reasoning: true,
    },
    Builtin {
        id: "gemini-2.5-pro",
        name: "Gemini 2.5 Pro",
        family: ModelFamily::Gemini,
        variant_type: VariantType::None,
        output_limit: 65_536,
        output_modalities: TEXT,
        reasoning: true,
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl From<&Builtin> for ModelCatalogEntry {
    fn from(b: &Builtin) -> Self {
        let context = match b.family {
            ModelFamily::Claude => CLAUDE_CONTEXT,
            ModelFamily::Gemini | ModelFamily::Unknown => GEMINI_CONTEXT,
        };
        Self {
            id: b.id.to_string(),
            name: b.name.to_string(),
            family: b.family,
            variant_type: b.variant_type,
            limit: ModelLimits { context, output: b.output_limit },
            modalities: ModelModalities {
                input: strings(TEXT_IMAGE_PDF),
                output: strings(b.output_modalities),
            },
            reasoning: b.reasoning,
        }
    }
}

/// Ordered set of models the sync can expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    entries: Vec<ModelCatalogEntry>,
}

impl ModelCatalog {
    /// Catalog built from caller-supplied entries.
    pub fn new(entries: Vec<ModelCatalogEntry>) -> Self {
        Self { entries }
    }

    /// The proxy's own model list.
    pub fn builtin() -> Self {
        Self::new(BUILTIN.iter().map(ModelCatalogEntry::from).collect())
    }

    pub fn get(&self, id: &str) -> Option<&ModelCatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn entries(&self) -> &[ModelCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
