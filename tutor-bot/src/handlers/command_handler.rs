//! Local commands: audio notice, help, level menu, level selection and reset.

use std::sync::Arc;

use async_trait::async_trait;
use backend_client::BackendClient;
use tracing::{error, info, instrument};
use tutor_core::{Handler, HandlerResponse, InboundMessage, Result};

use crate::router::{classify, Route};
use crate::session::SessionStore;
use crate::texts;

/// Replies to every route except the correction path, which it passes on with `Continue`.
#[derive(Clone)]
pub struct CommandHandler {
    sessions: Arc<dyn SessionStore>,
    backend: Arc<dyn BackendClient>,
}

impl CommandHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, backend: Arc<dyn BackendClient>) -> Self {
        Self { sessions, backend }
    }

    /// Backend reset; the local level is kept.
    async fn reset(&self, user_id: &str) -> HandlerResponse {
        match self.backend.reset(user_id).await {
            Ok(()) => HandlerResponse::Reply(texts::RESET_OK_TEXT.to_string()),
            Err(e) => {
                error!(user_id, error = %e, "reset failed");
                HandlerResponse::Reply(texts::RESET_FAILED_TEXT.to_string())
            }
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = %message.sender_id))]
    async fn handle(&self, message: &InboundMessage) -> Result<HandlerResponse> {
        let route = classify(message);
        info!(
            route = route.name(),
            to_backend = route.goes_to_backend(),
            "message classified"
        );

        let user_id = message.sender_id.as_str();
        let response = match route {
            Route::Ignore => HandlerResponse::Stop,
            Route::AudioDisabled => HandlerResponse::Reply(texts::AUDIO_DISABLED_TEXT.to_string()),
            Route::Help => HandlerResponse::Reply(texts::HELP_TEXT.to_string()),
            Route::LevelMenu => HandlerResponse::Reply(texts::LEVEL_MENU_TEXT.to_string()),
            Route::SetLevel(level) => {
                let session = self.sessions.set_level(user_id, level).await;
                info!(new_level = %session.level, "level selected");
                HandlerResponse::Reply(texts::level_confirmation(session.level))
            }
            Route::Reset => self.reset(user_id).await,
            Route::Delegated(command) => {
                info!(command = command.keyword(), "forwarding command to backend");
                HandlerResponse::Continue
            }
            Route::Correct => HandlerResponse::Continue,
        };
        Ok(response)
    }
}
