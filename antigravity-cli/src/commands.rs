use anyhow::Result;

use crate::catalog_commands;
use crate::cli::{Commands, OpencodeCommands};
use crate::opencode_commands;

pub async fn handle_opencode_command(cmd: OpencodeCommands) -> Result<()> {
    match cmd {
        OpencodeCommands::Sync { proxy, api_key, accounts, models } => {
            opencode_commands::sync(proxy, api_key, accounts, models).await
        }
        OpencodeCommands::Clear { proxy, legacy } => opencode_commands::clear(proxy, legacy).await,
        OpencodeCommands::Restore => opencode_commands::restore().await,
        OpencodeCommands::Status { proxy, json } => opencode_commands::status(proxy, json).await,
        OpencodeCommands::Show { file } => opencode_commands::show(file).await,
    }
}

pub async fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Opencode(cmd) => handle_opencode_command(cmd).await,
        Commands::Models { json } => catalog_commands::list_models(json),
        Commands::Variant { model, token } => catalog_commands::preview_variant(&model, &token),
    }
}
