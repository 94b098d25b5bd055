//! Handlers making up the tutor chain, in order: filter → warm-up → commands → correction.

mod command_handler;
mod correction_handler;
mod filter_handler;
mod warmup_handler;

pub use command_handler::CommandHandler;
pub use correction_handler::CorrectionHandler;
pub use filter_handler::FilterHandler;
pub use warmup_handler::WarmupHandler;
