//! Main entry: validate config, init logging, build components, run the Telegram REPL.

use anyhow::Result;
use fxbot_core::init_tracing;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::telegram::{run_repl, TelegramBotAdapter};

#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        log_file = %config.log_file(),
        default_base = %config.default_base_currency(),
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let adapter = Arc::new(TelegramBotAdapter::new(components.teloxide_bot.clone()));
    let handler_chain = build_handler_chain(components.executor.clone(), adapter);

    info!("Bot started successfully");
    run_repl(components.teloxide_bot, handler_chain).await
}
