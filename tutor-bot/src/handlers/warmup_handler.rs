//! Fires the one-shot backend warm-up on the first message that gets past the filter.

use std::sync::Arc;

use async_trait::async_trait;
use tutor_core::{Handler, InboundMessage, Result};

use crate::warmup::WarmupProber;

#[derive(Clone)]
pub struct WarmupHandler {
    prober: Arc<WarmupProber>,
}

impl WarmupHandler {
    pub fn new(prober: Arc<WarmupProber>) -> Self {
        Self { prober }
    }
}

#[async_trait]
impl Handler for WarmupHandler {
    /// Never stops the chain; the probe runs in the background.
    async fn before(&self, message: &InboundMessage) -> Result<bool> {
        self.prober.trigger(&message.sender_id).await;
        Ok(true)
    }
}
