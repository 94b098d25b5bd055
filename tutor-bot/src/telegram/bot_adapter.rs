//! Wraps teloxide::Bot and implements [`tutor_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId};
use tracing::error;
use tutor_core::{parse_chat_id, Bot as CoreBot, Result, TutorError};

/// Thin wrapper around teloxide::Bot that implements tutor-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Creates a teloxide Bot, pointing it at `api_url` when given (local Bot API server).
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> teloxide::Bot {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_text(&self, user_id: &str, text: &str) -> Result<()> {
        let chat_id = parse_chat_id(user_id)?;
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .await
            .map_err(|e| TutorError::Bot(e.to_string()))?;
        Ok(())
    }
}
