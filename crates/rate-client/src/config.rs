//! Rate source configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_FRESHNESS_WINDOW;
use crate::exchange_rate_api::DEFAULT_API_URL;

/// Documented fallback used when `EXCHANGE_RATE_API_KEY` is not set.
const FALLBACK_API_KEY: &str = "demo-key";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Whole seconds from `key`; unset or blank means `default`, anything else must parse.
fn secs_from_env(key: &str, default: u64) -> Result<u64> {
    match env::var(key).ok().filter(|s| !s.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a whole number of seconds, got {:?}", key, raw)),
        None => Ok(default),
    }
}

/// Rate source configuration interface.
pub trait RateSourceConfig: Send + Sync {
    fn api_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn cache_window(&self) -> Duration;
}

/// Rate source config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvRateSourceConfig {
    pub exchange_rate_api_url: String,
    pub exchange_rate_api_key: String,
    pub exchange_rate_timeout_secs: u64,
    pub rate_cache_ttl_secs: u64,
}

impl RateSourceConfig for EnvRateSourceConfig {
    fn api_url(&self) -> &str {
        &self.exchange_rate_api_url
    }
    fn api_key(&self) -> &str {
        &self.exchange_rate_api_key
    }
    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.exchange_rate_timeout_secs)
    }
    fn cache_window(&self) -> Duration {
        Duration::from_secs(self.rate_cache_ttl_secs)
    }
}

impl EnvRateSourceConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let exchange_rate_api_url = env::var("EXCHANGE_RATE_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let exchange_rate_api_key = env::var("EXCHANGE_RATE_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_API_KEY.to_string());
        let exchange_rate_timeout_secs =
            secs_from_env("EXCHANGE_RATE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let rate_cache_ttl_secs =
            secs_from_env("RATE_CACHE_TTL_SECS", DEFAULT_FRESHNESS_WINDOW.as_secs())?;
        Ok(Self {
            exchange_rate_api_url,
            exchange_rate_api_key,
            exchange_rate_timeout_secs,
            rate_cache_ttl_secs,
        })
    }

    /// Validate config: URL must parse, timeout and cache window must be non-zero.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.exchange_rate_api_url).is_err() {
            anyhow::bail!(
                "EXCHANGE_RATE_API_URL is not a valid URL: {}",
                self.exchange_rate_api_url
            );
        }
        if self.exchange_rate_timeout_secs == 0 {
            anyhow::bail!("EXCHANGE_RATE_TIMEOUT_SECS must be greater than 0");
        }
        if self.rate_cache_ttl_secs == 0 {
            anyhow::bail!("RATE_CACHE_TTL_SECS must be greater than 0");
        }
        Ok(())
    }

    /// True when no key was configured and the fallback is in use.
    pub fn uses_fallback_key(&self) -> bool {
        self.exchange_rate_api_key == FALLBACK_API_KEY
    }
}
