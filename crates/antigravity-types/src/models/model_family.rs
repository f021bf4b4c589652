//! Model / account family: which vendor a model or credential belongs to.

use serde::{Deserialize, Serialize};

/// Represents which AI provider family a model or account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    /// Anthropic Claude models (via Vertex AI)
    Claude,
    /// Google Gemini models (including flash variants)
    Gemini,
    /// Anything else; exported but never indexed per family
    #[default]
    #[serde(other)]
    Unknown,
}

impl ModelFamily {
    /// Families that always appear in `activeIndexByFamily`, in output order.
    pub const TRACKED: [Self; 2] = [Self::Claude, Self::Gemini];

    /// Returns true if this is a Claude family model.
    pub fn is_claude(self) -> bool {
        self == Self::Claude
    }

    /// Returns the family name as used in exported JSON keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Claude => "claude",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
