//! Core domain models for the OpenCode sync engine.

mod account;
mod accounts_export;
mod catalog;
mod config;
mod model_family;
mod status;
mod token;
mod variant;

pub use account::{Account, AccountIndex, AccountSummary};
pub use accounts_export::{AccountsExport, ExportedAccount, ACCOUNTS_EXPORT_VERSION};
pub use catalog::{ModelCatalogEntry, ModelLimits, ModelModalities};
pub use config::{AppConfig, ProxyConfig};
pub use model_family::ModelFamily;
pub use status::OpencodeStatus;
pub use token::TokenData;
pub use variant::{ThinkingParam, VariantToken, VariantType};
