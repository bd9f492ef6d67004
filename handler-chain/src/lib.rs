//! # Handler chain
//!
//! Runs a sequence of handlers for one inbound message. All `before` run in order (any false stops
//! the chain); then `handle` runs until one returns Stop or Reply; then all `after` run in reverse
//! with the final response.

use fxbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone)]
struct NamedHandler {
    name: &'static str,
    handler: Arc<dyn Handler>,
}

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<NamedHandler>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler. Its type name is used in log lines.
    pub fn add_handler<H: Handler + 'static>(self, handler: Arc<H>) -> Self {
        self.add_dyn_handler(std::any::type_name::<H>(), handler)
    }

    /// Appends an already type-erased handler under the given log name.
    pub fn add_dyn_handler(mut self, name: &'static str, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(NamedHandler { name, handler });
        self
    }

    /// Number of handlers in the chain.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse.
    ///
    /// A handler error aborts the chain immediately and is returned to the caller.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            message_type = %message.message_type,
            handlers = self.handlers.len(),
            "step: handler_chain started"
        );

        for h in self.handlers.iter() {
            if !h.handler.before(message).await? {
                info!(handler = %h.name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in self.handlers.iter() {
            let response = h.handler.handle(message).await?;
            debug!(handler = %h.name, response = ?response, "Handler processed");
            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(
                        handler = %h.name,
                        reply_len = ?reply_len(&response),
                        "step: handle phase ended by handler"
                    );
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.handler.after(message, &final_response).await?;
        }

        info!(user_id = message.user.id, "step: handler_chain finished");
        Ok(final_response)
    }
}

fn reply_len(response: &HandlerResponse) -> Option<usize> {
    match response {
        HandlerResponse::Reply(text) => Some(text.len()),
        _ => None,
    }
}

// Tests live in tests/handler_chain_test.rs
