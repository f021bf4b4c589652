//! Variant resolution errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when mapping a variant token to inference parameters.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum VariantError {
    /// Token is not defined for the variant type
    #[error("Unknown variant '{token}' for {variant_type}")]
    UnknownVariant {
        /// Variant type tag the lookup ran against
        variant_type: String,
        /// Token exactly as supplied
        token: String,
    },
}
