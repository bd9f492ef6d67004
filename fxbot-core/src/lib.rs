//! # fxbot-core
//!
//! Core types and traits for the currency bot: [`Bot`], [`Handler`], message and user types,
//! errors, and tracing initialization. Transport-agnostic; used by handler-chain and fxbot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User,
    TEXT_MESSAGE_TYPE,
};
