//! # English tutor bot
//!
//! Telegram front-end for a grammar-correction backend. Inbound messages run through a handler chain
//! (filter → warm-up → commands → correction); replies are annotated and sent back in chunks.

pub mod annotate;
pub mod cli;
pub mod components;
pub mod config;
pub mod dispatcher;
pub mod handlers;
pub mod router;
pub mod runner;
pub mod session;
pub mod telegram;
pub mod texts;
pub mod tutor;
pub mod warmup;

pub use annotate::annotate_reply;
pub use cli::{load_backend_config, load_config, Cli, Commands};
pub use components::{build_components, build_handler_chain, create_backend_client, TutorComponents};
pub use config::{BackendConfig, BaseConfig, BotConfig};
pub use dispatcher::{split_chunks, ReplyDispatcher, DEFAULT_MAX_CHUNK_LEN};
pub use handlers::{CommandHandler, CorrectionHandler, FilterHandler, WarmupHandler};
pub use router::{classify, classify_body, DelegatedCommand, Route};
pub use runner::run_bot;
pub use session::{InMemorySessionStore, SessionStore};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper};
pub use tutor::TutorBot;
pub use warmup::{WarmupProber, WarmupState};
