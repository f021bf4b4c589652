use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "antigravity",
    about = "Antigravity Manager - OpenCode config and accounts sync",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, default_value = "info", help = "Default log level (RUST_LOG overrides)")]
    pub log_level: String,

    #[arg(long, global = true, env = "ANTIGRAVITY_LOG_DIR", help = "Also write daily-rolling logs here")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(subcommand, about = "Sync, clear or restore OpenCode configuration")]
    Opencode(OpencodeCommands),

    #[command(about = "List the built-in model catalog")]
    Models {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Preview the thinking parameter a variant resolves to")]
    Variant {
        #[arg(help = "Model ID from the catalog")]
        model: String,

        #[arg(help = "Variant token (minimal, low, medium, high, max)")]
        token: String,
    },
}

/// Where the proxy lives and how to authenticate; unset values come from `gui_config.json`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ProxyArgs {
    #[arg(long, help = "Proxy base URL (default: http://127.0.0.1:<port>)")]
    pub proxy_url: Option<String>,

    #[arg(short, long, env = "ANTIGRAVITY_PORT", help = "Proxy port used when --proxy-url is omitted")]
    pub port: Option<u16>,
}

#[derive(Subcommand, Debug)]
pub enum OpencodeCommands {
    #[command(about = "Write the managed provider (and optionally accounts) into OpenCode")]
    Sync {
        #[command(flatten)]
        proxy: ProxyArgs,

        #[arg(long, env = "ANTIGRAVITY_API_KEY", hide_env_values = true, help = "Proxy API key")]
        api_key: Option<String>,

        #[arg(long, help = "Also export accounts to antigravity-accounts.json")]
        accounts: bool,

        #[arg(
            short,
            long = "model",
            value_name = "ID[:VARIANT]",
            help = "Model to sync, repeatable (default: whole catalog)"
        )]
        models: Vec<String>,
    },

    #[command(about = "Remove the managed provider and revert the accounts export")]
    Clear {
        #[command(flatten)]
        proxy: ProxyArgs,

        #[arg(long, help = "Also clean entries older releases wrote into anthropic/google")]
        legacy: bool,
    },

    #[command(about = "Restore opencode.json and accounts from backups")]
    Restore,

    #[command(about = "Show installation and sync status")]
    Status {
        #[command(flatten)]
        proxy: ProxyArgs,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Print one of the OpenCode config files")]
    Show {
        #[arg(help = "opencode.json (default), antigravity.json or antigravity-accounts.json")]
        file: Option<String>,
    },
}
