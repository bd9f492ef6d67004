//! # fxbot
//!
//! Currency conversion assistant. Parses chat commands into intents, resolves them against cached
//! live exchange rates and a per-chat base currency, and replies with plain text over Telegram.
//!
//! Flow per message: [`HandlerChain`] → [`LoggingHandler`] → [`CurrencyHandler`] (parse with
//! [`CommandParser`], execute with [`IntentExecutor`], render with [`format`], send with [`Bot`]).

pub mod cli;
pub mod command;
pub mod components;
pub mod config;
pub mod executor;
pub mod format;
pub mod handlers;
pub mod reply;
pub mod runner;
pub mod session;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use fxbot_core::{
    init_tracing, Bot, Chat, DbotError, Handler, HandlerResponse, Message,
    Result, User,
};
pub use handler_chain::HandlerChain;

pub use command::{Amount, CommandParser, Intent, IntentParser};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{AppExtensions, BotConfig};
pub use executor::IntentExecutor;
pub use handlers::{CurrencyHandler, LoggingHandler};
pub use reply::{ExecutionFailure, Outcome, RateQuote, Reply};
pub use runner::run_bot;
pub use session::{InMemorySessionStore, SessionState, SessionStore};
pub use telegram::{run_repl, TelegramBotAdapter};
