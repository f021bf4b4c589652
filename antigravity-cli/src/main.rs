//! Antigravity CLI
//!
//! Publishes Antigravity Manager's models and accounts to OpenCode:
//! - `antigravity opencode sync|clear|restore|status|show`
//! - `antigravity models` to list the built-in catalog
//! - `antigravity variant <MODEL> <TOKEN>` to preview thinking parameters

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

mod catalog_commands;
mod cli;
mod commands;
mod opencode_commands;

use antigravity_core::modules::logger;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_guard = logger::init_logger(&cli.log_level, cli.log_dir.as_deref());

    if let Err(e) = commands::handle_command(cli.command).await {
        eprintln!("{} {}", "✗".red(), e);
        drop(log_guard);
        std::process::exit(1);
    }
    Ok(())
}
