//! Model catalog entries exposed to the target tool.

use serde::{Deserialize, Serialize};

use super::{ModelFamily, VariantType};

/// Token limits advertised for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelLimits {
    pub context: u32,
    pub output: u32,
}

/// Input / output modalities advertised for a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelModalities {
    pub input: Vec<String>,
    pub output: Vec<String>,
}

/// One model the proxy can serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalogEntry {
    /// Model identifier as sent to the proxy
    pub id: String,
    /// Display name
    pub name: String,
    /// Vendor grouping
    pub family: ModelFamily,
    /// Which variant table applies
    #[serde(default)]
    pub variant_type: VariantType,
    pub limit: ModelLimits,
    pub modalities: ModelModalities,
    /// Whether the target tool should treat the model as reasoning-capable
    #[serde(default)]
    pub reasoning: bool,
}

impl ModelCatalogEntry {
    pub fn has_variants(&self) -> bool {
        self.variant_type != VariantType::None
    }
}
