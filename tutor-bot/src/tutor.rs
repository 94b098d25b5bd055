//! Message handler: runs the chain for one inbound message and delivers the reply.
//!
//! [`TutorBot::handle`] never fails. Errors are logged and turned into one "unexpected error" notice;
//! if that notice cannot be sent either, the failure is dropped.

use std::sync::Arc;

use handler_chain::HandlerChain;
use tracing::{error, info, instrument, warn};
use tutor_core::{Bot, HandlerResponse, InboundMessage, Result};

use crate::components::{build_handler_chain, TutorComponents};
use crate::dispatcher::ReplyDispatcher;
use crate::texts::UNEXPECTED_ERROR_TEXT;

#[derive(Clone)]
pub struct TutorBot {
    chain: HandlerChain,
    dispatcher: ReplyDispatcher,
    bot: Arc<dyn Bot>,
}

impl TutorBot {
    pub fn new(chain: HandlerChain, dispatcher: ReplyDispatcher, bot: Arc<dyn Bot>) -> Self {
        Self {
            chain,
            dispatcher,
            bot,
        }
    }

    /// Standard chain over `components`, replies split at `max_chunk_len` characters.
    pub fn from_components(components: &TutorComponents, max_chunk_len: usize) -> Self {
        let chain = build_handler_chain(components);
        let dispatcher = ReplyDispatcher::new(components.bot.clone(), max_chunk_len);
        Self::new(chain, dispatcher, components.bot.clone())
    }

    /// Handles one inbound message end to end.
    #[instrument(skip(self, message), fields(user_id = %message.sender_id, message_id = %message.id))]
    pub async fn handle(&self, message: &InboundMessage) {
        if let Err(e) = self.process(message).await {
            error!(error = %e, "message handling failed");
            if message.sender_id.is_empty() {
                return;
            }
            if let Err(send_err) = self
                .bot
                .send_text(&message.sender_id, UNEXPECTED_ERROR_TEXT)
                .await
            {
                warn!(error = %send_err, "failed to send error notice");
            }
        }
    }

    async fn process(&self, message: &InboundMessage) -> Result<()> {
        match self.chain.handle(message).await? {
            HandlerResponse::Reply(text) => {
                self.dispatcher.send_safe(&message.sender_id, &text).await?;
                info!("reply delivered");
            }
            HandlerResponse::Stop | HandlerResponse::Continue => {}
        }
        Ok(())
    }
}
