//! # rate-client
//!
//! Exchange-rate access for the currency bot: [`CurrencyCode`] and [`RateTable`] types, the
//! [`RateSource`] trait, the HTTP fetch primitive ([`ExchangeRateApi`]), and the cache-backed
//! adapter ([`CachedRateSource`]) that shields the upstream from repeated calls.

mod cache;
mod config;
mod currency;
mod error;
mod exchange_rate_api;
mod source;
mod table;

pub use cache::{CacheEntry, Clock, RateCache, SystemClock, DEFAULT_FRESHNESS_WINDOW};
pub use config::{EnvRateSourceConfig, RateSourceConfig};
pub use currency::{CurrencyCode, InvalidCurrencyCode};
pub use error::RateError;
pub use exchange_rate_api::{ExchangeRateApi, DEFAULT_API_URL, SUCCESS_RESULT};
pub use source::{CachedRateSource, RateSource};
pub use table::RateTable;
