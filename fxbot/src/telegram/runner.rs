//! REPL runner: converts every teloxide message to a core message and runs the handler chain in a
//! spawned task, so different chats are served concurrently.

use anyhow::Result;
use fxbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts the long-polling REPL. Returns when the REPL shuts down (e.g. on Ctrl-C).
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Connected to Telegram"),
        Err(e) => error!(error = %e, "get_me failed; continuing with REPL"),
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            tokio::spawn(async move {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_id = %core_msg.id,
                    "step: processing message (handler chain started)"
                );
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, chat_id = core_msg.chat.id, "Handler chain failed");
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
