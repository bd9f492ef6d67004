//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for the bot core. Transport failures carry the transport's message.
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
