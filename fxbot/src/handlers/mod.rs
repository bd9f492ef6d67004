//! Chain handlers: inbound logging and the currency command dispatcher.

mod currency_handler;
mod logging_handler;

pub use currency_handler::CurrencyHandler;
pub use logging_handler::LoggingHandler;
