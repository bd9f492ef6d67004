//! Telegram transport layer: message adapters, [`fxbot_core::Bot`] implementation, REPL runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{message_type_of, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
