//! Dispatcher for currency commands: parse → execute → format → send, one reply per message.

use async_trait::async_trait;
use fxbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::command::IntentParser;
use crate::executor::IntentExecutor;
use crate::format::{render, render_reply};
use crate::reply::Reply;

/// Terminal handler of the chain. Holds no state of its own and never retries.
///
/// Non-text messages skip parsing and get the fixed text-only notice. Every other message gets
/// exactly one reply, sent through `bot` and returned as [`HandlerResponse::Reply`].
pub struct CurrencyHandler {
    parser: Arc<dyn IntentParser>,
    executor: Arc<IntentExecutor>,
    bot: Arc<dyn Bot>,
}

impl CurrencyHandler {
    pub fn new(
        parser: Arc<dyn IntentParser>,
        executor: Arc<IntentExecutor>,
        bot: Arc<dyn Bot>,
    ) -> Self {
        Self {
            parser,
            executor,
            bot,
        }
    }

    async fn respond(&self, message: &Message) -> String {
        if !message.is_text() {
            info!(
                chat_id = message.chat.id,
                message_type = %message.message_type,
                "step: non-text message, sending notice"
            );
            return render_reply(&Reply::TextOnly);
        }

        let intent = self.parser.parse(&message.content);
        info!(chat_id = message.chat.id, intent = intent.name(), "step: parsed intent");
        let outcome = self.executor.execute(message.chat.id, intent).await;
        render(&outcome)
    }
}

#[async_trait]
impl Handler for CurrencyHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = self.respond(message).await;

        if let Err(e) = self.bot.reply_to(message, &text).await {
            error!(error = %e, "Failed to send reply");
            return Err(e);
        }
        Ok(HandlerResponse::Reply(text))
    }
}
