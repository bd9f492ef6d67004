//! Shared test doubles: a recording [`Bot`], a scripted [`RateSource`], and message builders.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use fxbot::{Amount, Bot, Chat, Message, Result, User};
use rate_client::{CurrencyCode, RateError, RateSource, RateTable};

/// Records every outbound text with its chat id.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<(i64, String)>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|(_, text)| text).collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }
}

/// Rate source answering from a fixed map of base → rates; unknown bases fail as `failure`.
pub struct StubRateSource {
    tables: Mutex<HashMap<CurrencyCode, Vec<(CurrencyCode, f64)>>>,
    failure: Mutex<Option<RateError>>,
    calls: AtomicUsize,
}

impl StubRateSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            tables: Mutex::new(HashMap::new()),
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn with_rates(self: Arc<Self>, base: &str, rates: &[(&str, f64)]) -> Arc<Self> {
        let rates = rates.iter().map(|(c, r)| (code(c), *r)).collect();
        self.tables.lock().unwrap().insert(code(base), rates);
        self
    }

    /// Every subsequent fetch fails with `error`.
    pub fn fail_with(&self, error: RateError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateSource for StubRateSource {
    async fn fetch(&self, base: &CurrencyCode) -> std::result::Result<RateTable, RateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.failure.lock().unwrap().clone() {
            return Err(e);
        }
        let tables = self.tables.lock().unwrap();
        match tables.get(base) {
            Some(rates) => Ok(RateTable::new(base.clone(), Utc::now(), rates.clone())),
            None => Err(RateError::Rejected {
                detail: "unsupported-code".to_string(),
            }),
        }
    }
}

pub fn amount(s: &str) -> Amount {
    Amount::parse(s).unwrap()
}

pub fn code(s: &str) -> CurrencyCode {
    CurrencyCode::parse(s).unwrap()
}

pub fn message_in_chat(chat_id: i64, content: &str, message_type: &str) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 123,
            username: Some("user".to_string()),
            first_name: Some("User".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: message_type.to_string(),
        created_at: Utc::now(),
    }
}

pub fn text_message(content: &str) -> Message {
    message_in_chat(456, content, "text")
}
