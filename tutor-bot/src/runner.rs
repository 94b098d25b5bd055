//! Main entry for the long-running bot: logging, components, Telegram REPL.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument};
use tutor_core::init_tracing;

use crate::components::build_components;
use crate::config::BotConfig;
use crate::telegram::{build_teloxide_bot, run_repl, TelegramBotAdapter};
use crate::tutor::TutorBot;

/// Validates config, initializes logging, builds components and runs the REPL until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        backend_url = %config.backend_url(),
        reply_chunk_size = config.backend().reply_chunk_size,
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url());
    let adapter = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let components = build_components(config.backend(), adapter)?;
    let tutor = Arc::new(TutorBot::from_components(
        &components,
        config.backend().reply_chunk_size,
    ));

    info!("Bot started successfully");

    run_repl(teloxide_bot, tutor).await
}
