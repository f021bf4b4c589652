//! # Antigravity Core
//!
//! Sync engine that publishes Antigravity Manager's models and accounts to
//! OpenCode without disturbing the rest of the user's configuration.
//!
//! ```text
//! antigravity-core/src/modules/
//! ├── opencode_sync/   # locator, backup, variants, merger, accounts export, commands
//! ├── account/         # read side of the manager's account store
//! ├── config.rs        # manager settings (gui_config.json)
//! └── logger.rs        # tracing subscriber setup
//! ```
//!
//! The engine is synchronous; the async command functions in
//! [`modules::opencode_sync`] run it on the blocking pool.

#![allow(clippy::map_err_ignore, reason = "Error context is provided in the replacement message")]
#![allow(clippy::implicit_clone, reason = "Explicit .clone() vs .to_string() is stylistic")]
// Test-only lints: allow panic!, println!, etc. in test code
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::unwrap_used,
        clippy::indexing_slicing,
        clippy::assertions_on_result_states
    )
)]

pub mod error;
pub mod modules;

pub use antigravity_types::models;

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use models::{Account, AccountsExport, AppConfig, OpencodeStatus, TokenData};
pub use modules::opencode_sync::{ModelCatalog, OpencodeSync};
