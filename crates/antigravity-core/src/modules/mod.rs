//! Account store, manager settings, logging, and the OpenCode sync engine.

pub mod account;
pub mod config;
pub mod logger;
pub mod opencode_sync;
