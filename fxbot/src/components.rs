//! Component factory: builds BotComponents and the handler chain from config.

use anyhow::Result;
use fxbot_core::Bot as CoreBot;
use handler_chain::HandlerChain;
use rate_client::{CachedRateSource, ExchangeRateApi, RateCache, RateSource};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::command::CommandParser;
use crate::config::BotConfig;
use crate::executor::IntentExecutor;
use crate::handlers::{CurrencyHandler, LoggingHandler};
use crate::session::{InMemorySessionStore, SessionStore};

/// Process-wide dependencies, built once at startup.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub executor: Arc<IntentExecutor>,
}

/// Builds the teloxide bot and an executor over the cached rate source and session store.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let mut teloxide_bot = teloxide::Bot::new(config.bot_token());
    if let Some(url) = config.telegram_api_url() {
        teloxide_bot = teloxide_bot.set_api_url(url.parse()?);
    }

    let rates_config = config.extensions().rate_source_config();
    let api = ExchangeRateApi::new(
        rates_config.api_url().to_string(),
        rates_config.api_key().to_string(),
        rates_config.request_timeout(),
    )?;
    if config.extensions.rates.uses_fallback_key() {
        warn!("EXCHANGE_RATE_API_KEY not set; using the fallback key");
    }
    let cache = RateCache::with_window(rates_config.cache_window());
    let rate_source: Arc<dyn RateSource> =
        Arc::new(CachedRateSource::new(Arc::new(api), cache));
    info!(
        api_url = %rates_config.api_url(),
        cache_window_secs = rates_config.cache_window().as_secs(),
        "Rate source ready"
    );

    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::with_default_base(
        config.default_base_currency().clone(),
    ));
    let executor = Arc::new(IntentExecutor::new(rate_source, sessions));

    Ok(BotComponents {
        teloxide_bot,
        executor,
    })
}

/// Chain: LoggingHandler → CurrencyHandler. Replies go out through `bot`.
pub fn build_handler_chain(executor: Arc<IntentExecutor>, bot: Arc<dyn CoreBot>) -> HandlerChain {
    let currency = CurrencyHandler::new(Arc::new(CommandParser::new()), executor, bot);
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(currency))
}
