//! Reply dispatcher: delivers a reply, split into ordered chunks when it is longer than the channel allows.

use std::sync::Arc;

use tracing::{debug, instrument, warn};
use tutor_core::{Bot, Result};

/// Default maximum characters per outbound message.
pub const DEFAULT_MAX_CHUNK_LEN: usize = 3000;

/// Splits `text` into consecutive chunks of at most `max_len` characters.
///
/// Counts Unicode scalar values, never splits inside one, and the chunks concatenate back to `text`.
/// Empty text yields no chunks. `max_len` of 0 is treated as 1.
pub fn split_chunks(text: &str, max_len: usize) -> Vec<&str> {
    let max_len = max_len.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == max_len {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// Sends replies through a [`Bot`], one chunk at a time.
#[derive(Clone)]
pub struct ReplyDispatcher {
    bot: Arc<dyn Bot>,
    max_chunk_len: usize,
}

impl ReplyDispatcher {
    pub fn new(bot: Arc<dyn Bot>, max_chunk_len: usize) -> Self {
        Self {
            bot,
            max_chunk_len: max_chunk_len.max(1),
        }
    }

    pub fn max_chunk_len(&self) -> usize {
        self.max_chunk_len
    }

    /// Sends `text` to `user_id`. Chunks go out sequentially in order; the first failed send stops the rest.
    #[instrument(skip(self, text), fields(text_len = text.chars().count()))]
    pub async fn send_safe(&self, user_id: &str, text: &str) -> Result<()> {
        let chunks = split_chunks(text, self.max_chunk_len);
        if chunks.is_empty() {
            warn!(user_id, "empty reply, nothing sent");
            return Ok(());
        }

        let total = chunks.len();
        for (i, chunk) in chunks.into_iter().enumerate() {
            debug!(user_id, chunk = i + 1, total, "sending chunk");
            self.bot.send_text(user_id, chunk).await?;
        }
        Ok(())
    }
}
