//! Bot abstraction for sending text back to a user.
//!
//! [`Bot`] is transport-agnostic; tutor-bot's Telegram adapter implements it via teloxide and tests use a recording mock.

use crate::error::{Result, TutorError};
use async_trait::async_trait;

/// Outbound side of the messaging channel. The core only calls it and never manages the connection.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given user.
    async fn send_text(&self, user_id: &str, text: &str) -> Result<()>;
}

/// Parses a sender id string into a numeric chat id. Used by transports with integer chat ids.
pub fn parse_chat_id(s: &str) -> Result<i64> {
    s.parse()
        .map_err(|_| TutorError::Bot(format!("Invalid chat id: {}", s)))
}
