//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{BackendConfig, BotConfig};

#[derive(Parser)]
#[command(name = "tutor-bot")]
#[command(about = "English tutor Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Probe the correction backend's health endpoint once (with retries) and exit.
    Check,
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Load only the backend section; `check` does not need a bot token.
pub fn load_backend_config() -> Result<BackendConfig> {
    let config = BackendConfig::load()?;
    config.validate()?;
    Ok(config)
}
