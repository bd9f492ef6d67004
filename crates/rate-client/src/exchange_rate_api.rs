//! ExchangeRate-API v6 client: the raw fetch primitive behind [`RateSource`].

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, warn};

use crate::currency::CurrencyCode;
use crate::error::RateError;
use crate::source::RateSource;
use crate::table::RateTable;

/// Versioned endpoint root; requests go to `{root}/{api_key}/latest/{BASE}`.
pub const DEFAULT_API_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Value of `result` on a successful response.
pub const SUCCESS_RESULT: &str = "success";

const LOG_BODY_PREVIEW_LEN: usize = 200;

/// HTTP client for the latest-rates endpoint. Performs exactly one request per call, no caching.
#[derive(Debug, Clone)]
pub struct ExchangeRateApi {
    client: Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    time_last_update_utc: Option<String>,
    base_code: Option<String>,
    #[serde(default)]
    conversion_rates: HashMap<String, f64>,
}

impl ExchangeRateApi {
    /// Builds a client for `api_url` with a per-request timeout.
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn latest_url(&self, base: &CurrencyCode) -> String {
        format!("{}/{}/latest/{}", self.api_url, self.api_key, base)
    }

    /// Turns a decoded body into a validated table.
    fn into_table(base: &CurrencyCode, body: LatestResponse) -> Result<RateTable, RateError> {
        if body.result != SUCCESS_RESULT {
            let detail = body.error_type.unwrap_or(body.result);
            return Err(RateError::Rejected { detail });
        }
        if let Some(code) = body.base_code.as_deref() {
            if !code.eq_ignore_ascii_case(base.as_str()) {
                return Err(RateError::Rejected {
                    detail: format!("base mismatch: asked {}, got {}", base, code),
                });
            }
        }
        let total = body.conversion_rates.len();
        let rates: Vec<(CurrencyCode, f64)> = body
            .conversion_rates
            .into_iter()
            .filter_map(|(code, rate)| CurrencyCode::parse(&code).ok().map(|c| (c, rate)))
            .collect();
        let table = RateTable::new(base.clone(), Utc::now(), rates)
            .with_last_update(body.time_last_update_utc);
        if table.len() != total {
            warn!(base = %base, total, kept = table.len(), "Dropped malformed rate entries");
        }
        Ok(table)
    }
}

#[async_trait]
impl RateSource for ExchangeRateApi {
    async fn fetch(&self, base: &CurrencyCode) -> Result<RateTable, RateError> {
        info!(base = %base, api_url = %self.api_url, "step: rates upstream request");

        let response = self
            .client
            .get(self.latest_url(base))
            .send()
            .await
            .map_err(|e| {
                warn!(base = %base, error = %e, "Rates request failed");
                RateError::Unreachable(e.without_url().to_string())
            })?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RateError::Unreachable(e.without_url().to_string()))?;

        let body: LatestResponse = serde_json::from_str(&text).map_err(|e| {
            let preview: String = text.chars().take(LOG_BODY_PREVIEW_LEN).collect();
            warn!(base = %base, status = %status, error = %e, body_preview = %preview, "Undecodable rates response");
            RateError::Unreachable(format!("HTTP {}: undecodable body: {}", status, e))
        })?;

        let table = Self::into_table(base, body).map_err(|e| {
            warn!(base = %base, status = %status, error = %e, "Rates request rejected");
            e
        })?;
        info!(
            base = %base,
            rates = table.len(),
            last_update_utc = ?table.last_update_utc,
            "step: rates upstream done"
        );
        Ok(table)
    }
}
