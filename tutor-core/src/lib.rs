//! # tutor-core
//!
//! Core types and traits for the tutor bot: [`Bot`], [`Handler`], [`InboundMessage`], [`Level`],
//! [`UserSession`] and tracing initialization. Transport-agnostic; used by handler-chain and tutor-bot.

pub mod bot;
pub mod error;
pub mod level;
pub mod logger;
pub mod types;

pub use bot::{parse_chat_id, Bot};
pub use error::{Result, TutorError};
pub use level::Level;
pub use logger::init_tracing;
pub use types::{
    Handler, HandlerResponse, InboundMessage, MediaType, ToInboundMessage, UserSession,
};
