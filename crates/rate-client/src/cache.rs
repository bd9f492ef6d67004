//! Process-wide rate cache with read-time freshness checks.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::currency::CurrencyCode;
use crate::table::RateTable;

/// Default freshness window: 5 minutes.
pub const DEFAULT_FRESHNESS_WINDOW: std::time::Duration = std::time::Duration::from_secs(300);

/// Source of "now" for freshness checks. Tests substitute a manual clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// One cached table and the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub table: RateTable,
    pub stored_at: DateTime<Utc>,
}

/// Maps a base currency to its last fetched table.
///
/// Entries are never evicted; a stale entry is a miss and gets replaced on the next successful
/// fetch. The key space is the set of bases users actually ask for.
#[derive(Debug, Clone)]
pub struct RateCache {
    entries: Arc<RwLock<HashMap<CurrencyCode, CacheEntry>>>,
    window: Duration,
}

impl RateCache {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_FRESHNESS_WINDOW)
    }

    pub fn with_window(window: std::time::Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            window: Duration::from_std(window).unwrap_or_else(|_| Duration::days(36_500)),
        }
    }

    /// An entry is fresh iff `now - stored_at < window`.
    pub fn is_fresh(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(entry.stored_at) < self.window
    }

    /// Returns the cached table for `base` if it is still fresh at `now`.
    pub async fn get(&self, base: &CurrencyCode, now: DateTime<Utc>) -> Option<RateTable> {
        let entries = self.entries.read().await;
        let entry = entries.get(base)?;
        if self.is_fresh(entry, now) {
            Some(entry.table.clone())
        } else {
            debug!(base = %base, stored_at = %entry.stored_at, "Cached rate table is stale");
            None
        }
    }

    /// Stores `table` under `base`, replacing any previous entry.
    pub async fn put(&self, base: CurrencyCode, table: RateTable, now: DateTime<Utc>) {
        let mut entries = self.entries.write().await;
        entries.insert(
            base,
            CacheEntry {
                table,
                stored_at: now,
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}
