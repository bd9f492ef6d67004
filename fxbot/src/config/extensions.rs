//! App extensions: rate source settings and the default session base currency.

use anyhow::Result;
use rate_client::{CurrencyCode, EnvRateSourceConfig, RateSourceConfig};
use std::env;

/// Application extension config. Implement this trait to inject custom config.
pub trait AppExtensions: Send + Sync {
    fn rate_source_config(&self) -> &dyn RateSourceConfig;
    /// Base currency of new sessions.
    fn default_base_currency(&self) -> &CurrencyCode;
}

/// Extensions loaded from env: EXCHANGE_RATE_* / RATE_CACHE_TTL_SECS and DEFAULT_BASE_CURRENCY.
pub struct CurrencyAppExtensions {
    pub rates: EnvRateSourceConfig,
    pub default_base_currency: CurrencyCode,
}

impl AppExtensions for CurrencyAppExtensions {
    fn rate_source_config(&self) -> &dyn RateSourceConfig {
        &self.rates
    }
    fn default_base_currency(&self) -> &CurrencyCode {
        &self.default_base_currency
    }
}

impl CurrencyAppExtensions {
    /// Load from environment variables. Fails if DEFAULT_BASE_CURRENCY is not a 3-letter code.
    pub fn from_env() -> Result<Self> {
        let rates = EnvRateSourceConfig::from_env()?;
        let default_base_currency = match env::var("DEFAULT_BASE_CURRENCY") {
            Ok(s) if !s.trim().is_empty() => CurrencyCode::parse(&s)
                .map_err(|e| anyhow::anyhow!("DEFAULT_BASE_CURRENCY: {}", e))?,
            _ => CurrencyCode::usd(),
        };
        Ok(Self {
            rates,
            default_base_currency,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.rates.validate()
    }
}
