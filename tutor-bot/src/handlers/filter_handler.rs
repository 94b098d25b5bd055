//! Drops messages that must never produce a reply: group chats and empty bodies.

use async_trait::async_trait;
use tracing::info;
use tutor_core::{Handler, InboundMessage, Result};

use crate::router::{classify, Route};

/// Stops the chain in `before` so nothing later (warm-up included) sees the message.
#[derive(Clone, Default)]
pub struct FilterHandler;

impl FilterHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for FilterHandler {
    async fn before(&self, message: &InboundMessage) -> Result<bool> {
        if message.is_group {
            info!(user_id = %message.sender_id, "group message dropped");
            return Ok(false);
        }
        if classify(message) == Route::Ignore {
            info!(user_id = %message.sender_id, "empty message ignored");
            return Ok(false);
        }
        Ok(true)
    }
}
