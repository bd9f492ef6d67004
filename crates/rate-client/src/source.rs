//! Rate source trait and the cache-backed adapter.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::cache::{Clock, RateCache, SystemClock};
use crate::currency::CurrencyCode;
use crate::error::RateError;
use crate::table::RateTable;

/// Anything that can produce a rate table for a base currency.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch(&self, base: &CurrencyCode) -> Result<RateTable, RateError>;
}

/// Serves fresh tables from a [`RateCache`] and falls back to an upstream [`RateSource`].
///
/// Upstream failures surface immediately; there are no retries. Concurrent misses for the same
/// base may each call upstream; the last successful write wins.
#[derive(Clone)]
pub struct CachedRateSource {
    upstream: Arc<dyn RateSource>,
    cache: RateCache,
    clock: Arc<dyn Clock>,
}

impl CachedRateSource {
    pub fn new(upstream: Arc<dyn RateSource>, cache: RateCache) -> Self {
        Self::with_clock(upstream, cache, Arc::new(SystemClock))
    }

    pub fn with_clock(upstream: Arc<dyn RateSource>, cache: RateCache, clock: Arc<dyn Clock>) -> Self {
        Self {
            upstream,
            cache,
            clock,
        }
    }

    pub fn cache(&self) -> &RateCache {
        &self.cache
    }
}

#[async_trait]
impl RateSource for CachedRateSource {
    #[instrument(skip(self), fields(base = %base))]
    async fn fetch(&self, base: &CurrencyCode) -> Result<RateTable, RateError> {
        let now = self.clock.now();
        if let Some(table) = self.cache.get(base, now).await {
            debug!(fetched_at = %table.fetched_at, "Rate cache hit");
            return Ok(table);
        }

        info!("step: rate cache miss, fetching upstream");
        match self.upstream.fetch(base).await {
            Ok(table) => {
                self.cache.put(base.clone(), table.clone(), self.clock.now()).await;
                Ok(table)
            }
            Err(e) => {
                warn!(cause = e.cause(), error = %e, "Upstream rate fetch failed");
                Err(e)
            }
        }
    }
}
