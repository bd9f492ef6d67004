//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: before/after order, a before() that stops the chain, Reply ending the handle phase and
//! reaching after(), Ignore falling through to the next handler, and error propagation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use fxbot_core::{Chat, DbotError, Handler, HandlerResponse, Message, User};
use handler_chain::HandlerChain;

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

/// Records every phase it sees as `phase_NAME`; `handle` returns the configured response.
struct RecordingHandler {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
    allow: bool,
    response: HandlerResponse,
}

impl RecordingHandler {
    fn new(name: &'static str, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name,
            log,
            allow: true,
            response: HandlerResponse::Continue,
        }
    }

    fn responding(mut self, response: HandlerResponse) -> Self {
        self.response = response;
        self
    }

    fn blocking(mut self) -> Self {
        self.allow = false;
        self
    }
}

#[async_trait]
impl Handler for RecordingHandler {
    async fn before(&self, _message: &Message) -> fxbot_core::Result<bool> {
        self.log.lock().unwrap().push(format!("before_{}", self.name));
        Ok(self.allow)
    }

    async fn handle(&self, _message: &Message) -> fxbot_core::Result<HandlerResponse> {
        self.log.lock().unwrap().push(format!("handle_{}", self.name));
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, response: &HandlerResponse) -> fxbot_core::Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("after_{}:{:?}", self.name, response));
        Ok(())
    }
}

/// **Test: before runs first→last, handle runs for each Continue, after runs last→first.**
#[tokio::test]
async fn test_phases_run_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler::new("first", log.clone())))
        .add_handler(Arc::new(RecordingHandler::new("second", log.clone())));

    let result = chain.handle(&create_test_message("help")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "before_first",
            "before_second",
            "handle_first",
            "handle_second",
            "after_second:Continue",
            "after_first:Continue",
        ]
    );
}

/// **Test: before returning false stops the chain; no handle and no after run.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler::new("gate", log.clone()).blocking()))
        .add_handler(Arc::new(RecordingHandler::new("worker", log.clone())));

    let result = chain.handle(&create_test_message("help")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(*log.lock().unwrap(), vec!["before_gate"]);
}

/// **Test: Reply ends the handle phase; later handlers are not handled; after sees the reply.**
#[tokio::test]
async fn test_reply_ends_handle_phase_and_reaches_after() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let reply = HandlerResponse::Reply("100 USD = 92.00 EUR".to_string());
    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler::new("logger", log.clone())))
        .add_handler(Arc::new(
            RecordingHandler::new("converter", log.clone()).responding(reply.clone()),
        ))
        .add_handler(Arc::new(RecordingHandler::new("unreached", log.clone())));

    let result = chain
        .handle(&create_test_message("convert 100 USD to EUR"))
        .await
        .unwrap();

    assert_eq!(result, reply);
    let log = log.lock().unwrap();
    assert!(!log.contains(&"handle_unreached".to_string()));
    assert!(log.contains(&format!("after_logger:{:?}", reply)));
}

/// **Test: Ignore does not end the handle phase; the next handler still runs.**
#[tokio::test]
async fn test_ignore_falls_through() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(
            RecordingHandler::new("skipper", log.clone()).responding(HandlerResponse::Ignore),
        ))
        .add_handler(Arc::new(
            RecordingHandler::new("stopper", log.clone()).responding(HandlerResponse::Stop),
        ));

    let result = chain.handle(&create_test_message("help")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert!(log.lock().unwrap().contains(&"handle_stopper".to_string()));
}

/// **Test: an error from handle aborts the chain and is returned.**
#[tokio::test]
async fn test_handle_error_propagates() {
    struct FailingHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _message: &Message) -> fxbot_core::Result<HandlerResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(DbotError::Bot("send failed".to_string()))
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new().add_handler(Arc::new(FailingHandler {
        calls: calls.clone(),
    }));

    let err = chain.handle(&create_test_message("help")).await.unwrap_err();

    assert!(matches!(err, DbotError::Bot(ref m) if m == "send failed"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(chain.len(), 1);
}
