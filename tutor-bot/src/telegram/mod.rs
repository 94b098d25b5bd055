//! Telegram transport: message adapter, [`tutor_core::Bot`] implementation and REPL runner.
//! Only connectivity lives here; routing and backend logic stay in the core.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::TelegramMessageWrapper;
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use runner::run_repl;
