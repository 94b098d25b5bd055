//! Core types: inbound message, media type, user session, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Kind of payload the transport delivered. Only `Text` (and captions of `Other`) carry a body worth routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Text,
    /// Audio file or voice note; rejected with a fixed notice.
    Audio,
    Other,
}

/// A single inbound message as seen by the core. Produced by the transport adapter; read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub id: String,
    /// Identifier used both to reply and as the backend `phone` key.
    pub sender_id: String,
    pub body: String,
    pub is_group: bool,
    pub media_type: MediaType,
    pub received_at: DateTime<Utc>,
}

impl InboundMessage {
    /// Private text message; the common case in tests and adapters.
    pub fn text(id: impl Into<String>, sender_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender_id: sender_id.into(),
            body: body.into(),
            is_group: false,
            media_type: MediaType::Text,
            received_at: Utc::now(),
        }
    }

    /// Body with surrounding whitespace removed; all routing works on this.
    pub fn trimmed_body(&self) -> &str {
        self.body.trim()
    }
}

/// Per-user state kept by the session store. Created on the first level selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub level: Level,
}

/// Converts a transport-specific message type to an [`InboundMessage`].
pub trait ToInboundMessage: Send + Sync {
    fn to_inbound(&self) -> InboundMessage;
}

/// Handler result for the chain. `Reply(text)` carries the text the dispatcher will deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing is sent.
    Stop,
    /// Stop the chain and deliver this text to the sender.
    Reply(String),
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &InboundMessage) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &InboundMessage) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &InboundMessage,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_constructor_defaults_to_private_text() {
        let msg = InboundMessage::text("1", "42", "  hello ");
        assert!(!msg.is_group);
        assert_eq!(msg.media_type, MediaType::Text);
        assert_eq!(msg.trimmed_body(), "hello");
    }
}
