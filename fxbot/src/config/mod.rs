//! Bot configuration: BaseConfig (Telegram + log) + AppExtensions (rate source, default base).

mod base;
mod bot_config;
mod extensions;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use extensions::{AppExtensions, CurrencyAppExtensions};
