//! Per-conversation state: the base-currency preference.

use async_trait::async_trait;
use rate_client::CurrencyCode;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// State kept for one conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub base_currency: CurrencyCode,
}

/// Storage for [`SessionState`], keyed by conversation (chat) id.
///
/// A session is created implicitly with the default base on first access. The core never deletes
/// sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn base_currency(&self, session_id: i64) -> CurrencyCode;
    async fn set_base_currency(&self, session_id: i64, base: CurrencyCode);
}

type StateMap = HashMap<i64, SessionState>;

/// Process-local session store.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    states: Arc<RwLock<StateMap>>,
    default_base: CurrencyCode,
}

impl InMemorySessionStore {
    /// Store whose sessions start with USD.
    pub fn new() -> Self {
        Self::with_default_base(CurrencyCode::usd())
    }

    pub fn with_default_base(default_base: CurrencyCode) -> Self {
        Self {
            states: Arc::new(RwLock::new(StateMap::new())),
            default_base,
        }
    }

    pub async fn len(&self) -> usize {
        self.states.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn base_currency(&self, session_id: i64) -> CurrencyCode {
        if let Some(state) = self.states.read().await.get(&session_id) {
            return state.base_currency.clone();
        }
        let mut states = self.states.write().await;
        states
            .entry(session_id)
            .or_insert_with(|| SessionState {
                base_currency: self.default_base.clone(),
            })
            .base_currency
            .clone()
    }

    async fn set_base_currency(&self, session_id: i64, base: CurrencyCode) {
        info!(session_id, base = %base, "Session base currency updated");
        let mut states = self.states.write().await;
        states.insert(
            session_id,
            SessionState {
                base_currency: base,
            },
        );
    }
}
