//! Variant tags and tokens for reasoning-capable models.
//!
//! A model's [`VariantType`] decides which tokens it accepts and whether a
//! token resolves to a numeric thinking budget or a named thinking level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of variant tables, one per model family generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VariantType {
    /// Claude extended thinking with `budget_tokens`
    #[serde(rename = "claude-thinking-budget")]
    ClaudeThinkingBudget,
    /// Gemini 3 Pro `thinkingLevel` (low / high only)
    #[serde(rename = "gemini3-pro-level")]
    Gemini3ProLevel,
    /// Gemini 3 Flash `thinkingLevel`
    #[serde(rename = "gemini3-flash-level")]
    Gemini3FlashLevel,
    /// Gemini 2.5 `thinkingBudget`
    #[serde(rename = "gemini25-thinking-budget")]
    Gemini25ThinkingBudget,
    /// No reasoning parameters
    #[default]
    #[serde(rename = "none")]
    None,
}

impl VariantType {
    pub const ALL: [Self; 5] = [
        Self::ClaudeThinkingBudget,
        Self::Gemini3ProLevel,
        Self::Gemini3FlashLevel,
        Self::Gemini25ThinkingBudget,
        Self::None,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClaudeThinkingBudget => "claude-thinking-budget",
            Self::Gemini3ProLevel => "gemini3-pro-level",
            Self::Gemini3FlashLevel => "gemini3-flash-level",
            Self::Gemini25ThinkingBudget => "gemini25-thinking-budget",
            Self::None => "none",
        }
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantType {
    type Err = String;

    /// Exact, case-sensitive match on the serialized tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown variant type: {}", s))
    }
}

/// Reasoning intensity qualifier supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantToken {
    Minimal,
    Low,
    Medium,
    High,
    Max,
}

impl VariantToken {
    pub const ALL: [Self; 5] = [Self::Minimal, Self::Low, Self::Medium, Self::High, Self::Max];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for VariantToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantToken {
    type Err = String;

    /// Exact, case-sensitive: `"High"` is not `high`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown variant token: {}", s))
    }
}

/// Provider-specific parameter a token resolves to.
///
/// Serializes as `{"thinkingBudget": 8192}` or `{"thinkingLevel": "high"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThinkingParam {
    #[serde(rename = "thinkingBudget")]
    Budget(u32),
    #[serde(rename = "thinkingLevel")]
    Level(String),
}

impl ThinkingParam {
    pub fn budget(&self) -> Option<u32> {
        match self {
            Self::Budget(b) => Some(*b),
            Self::Level(_) => None,
        }
    }

    pub fn level(&self) -> Option<&str> {
        match self {
            Self::Budget(_) => None,
            Self::Level(l) => Some(l.as_str()),
        }
    }
}

impl fmt::Display for ThinkingParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Budget(b) => write!(f, "thinkingBudget={}", b),
            Self::Level(l) => write!(f, "thinkingLevel={}", l),
        }
    }
}
