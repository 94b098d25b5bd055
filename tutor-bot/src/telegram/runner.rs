//! REPL runner: converts teloxide messages to [`tutor_core::InboundMessage`] and hands each to [`TutorBot`] in its own task.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, instrument};
use tutor_core::ToInboundMessage;

use super::adapters::TelegramMessageWrapper;
use crate::tutor::TutorBot;

/// Starts the REPL. Each message is spawned so a slow backend call for one user does not block others.
#[instrument(skip(bot, tutor))]
pub async fn run_repl(bot: teloxide::Bot, tutor: Arc<TutorBot>) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "connected to Telegram");
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let tutor = tutor.clone();

        async move {
            let inbound = TelegramMessageWrapper(&msg).to_inbound();
            info!(
                user_id = %inbound.sender_id,
                media_type = ?inbound.media_type,
                is_group = inbound.is_group,
                "Received message"
            );

            tokio::spawn(async move {
                tutor.handle(&inbound).await;
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
