//! Rate table snapshot.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::currency::CurrencyCode;

/// Immutable snapshot of rates relative to one base: 1 unit of `base` = `rate` units of target.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    pub base: CurrencyCode,
    /// When this table was fetched from the upstream.
    pub fetched_at: DateTime<Utc>,
    /// Upstream's own update stamp (`time_last_update_utc`), if it sent one.
    pub last_update_utc: Option<String>,
    rates: BTreeMap<CurrencyCode, f64>,
}

impl RateTable {
    /// Builds a table, keeping only positive finite rates.
    pub fn new(
        base: CurrencyCode,
        fetched_at: DateTime<Utc>,
        rates: impl IntoIterator<Item = (CurrencyCode, f64)>,
    ) -> Self {
        let rates = rates
            .into_iter()
            .filter(|(_, rate)| rate.is_finite() && *rate > 0.0)
            .collect();
        Self {
            base,
            fetched_at,
            last_update_utc: None,
            rates,
        }
    }

    pub fn with_last_update(mut self, last_update_utc: Option<String>) -> Self {
        self.last_update_utc = last_update_utc;
        self
    }

    /// Rate for `target`; `None` means the pair is unsupported.
    pub fn rate(&self, target: &CurrencyCode) -> Option<f64> {
        self.rates.get(target).copied()
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
