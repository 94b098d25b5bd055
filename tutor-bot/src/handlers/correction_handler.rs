//! Default path: sends the text to the backend with the user's level and replies with the annotated answer.

use std::sync::Arc;

use async_trait::async_trait;
use backend_client::{BackendClient, BackendError, CorrectionRequest};
use tracing::{error, instrument, warn};
use tutor_core::{Handler, HandlerResponse, InboundMessage, Result};

use crate::annotate::annotate_reply;
use crate::session::SessionStore;
use crate::texts;

#[derive(Clone)]
pub struct CorrectionHandler {
    sessions: Arc<dyn SessionStore>,
    backend: Arc<dyn BackendClient>,
}

impl CorrectionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, backend: Arc<dyn BackendClient>) -> Self {
        Self { sessions, backend }
    }
}

#[async_trait]
impl Handler for CorrectionHandler {
    /// Backend failures become a notice for the user, never an error for the chain.
    #[instrument(skip(self, message), fields(user_id = %message.sender_id))]
    async fn handle(&self, message: &InboundMessage) -> Result<HandlerResponse> {
        let user_id = message.sender_id.as_str();
        let level = self.sessions.level_for(user_id).await;
        let request = CorrectionRequest::new(message.trimmed_body(), level, user_id);

        let reply = match self.backend.correct(&request).await {
            Ok(reply) => annotate_reply(&reply),
            Err(e @ BackendError::MalformedResponse { .. }) => {
                warn!(error = %e, "backend reply unusable, sending fallback");
                texts::FALLBACK_REPLY_TEXT.to_string()
            }
            Err(e) => {
                error!(error = %e, "correction failed after retries");
                texts::BACKEND_UNAVAILABLE_TEXT.to_string()
            }
        };
        Ok(HandlerResponse::Reply(reply))
    }
}
