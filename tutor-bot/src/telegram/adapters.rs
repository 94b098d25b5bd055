//! Adapter from teloxide messages to [`InboundMessage`].

use tutor_core::{InboundMessage, MediaType, ToInboundMessage};

/// Wraps a teloxide Message for conversion to [`InboundMessage`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

/// Media type from what the message carries: any audio or voice note wins, then text.
pub(crate) fn media_type_for(has_audio: bool, has_text: bool) -> MediaType {
    if has_audio {
        MediaType::Audio
    } else if has_text {
        MediaType::Text
    } else {
        MediaType::Other
    }
}

impl<'a> ToInboundMessage for TelegramMessageWrapper<'a> {
    fn to_inbound(&self) -> InboundMessage {
        let msg = self.0;
        let has_audio = msg.voice().is_some() || msg.audio().is_some();
        let body = msg.text().or_else(|| msg.caption()).unwrap_or("");

        InboundMessage {
            id: msg.id.to_string(),
            // Replies go to the chat; in private chats this is the user's id.
            sender_id: msg.chat.id.0.to_string(),
            body: body.to_string(),
            is_group: msg.chat.is_group() || msg.chat.is_supergroup(),
            media_type: media_type_for(has_audio, msg.text().is_some()),
            received_at: msg.date,
        }
    }
}
