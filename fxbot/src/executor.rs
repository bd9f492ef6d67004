//! Intent executor: resolves an [`Intent`] against session state and live rates.
//!
//! Each call is one atomic transition. The executor is the only writer of the base-currency
//! preference, and only writes after validation succeeded. Upstream errors end here as
//! [`ExecutionFailure::ServiceUnavailable`].

use rate_client::{CurrencyCode, RateSource, RateTable};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::command::{Amount, Intent};
use crate::reply::{ExecutionFailure, Outcome, RateQuote, Reply};
use crate::session::SessionStore;

/// Currencies listed by a rates request, in display order.
pub const WATCHED_CURRENCIES: [&str; 4] = ["USD", "EUR", "GBP", "JPY"];

/// Rounds half away from zero to `decimals` places.
///
/// The shift is done on the shortest decimal form of `value`, so `1.005` rounds to `1.01` even
/// though its binary value sits just below the half.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = format!("{}e{}", value, decimals)
        .parse::<f64>()
        .unwrap_or(value * scale);
    scaled.round() / scale
}

pub struct IntentExecutor {
    rates: Arc<dyn RateSource>,
    sessions: Arc<dyn SessionStore>,
    probe_base: CurrencyCode,
}

impl IntentExecutor {
    /// Executor that validates new base currencies against the USD table.
    pub fn new(rates: Arc<dyn RateSource>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            rates,
            sessions,
            probe_base: CurrencyCode::usd(),
        }
    }

    #[instrument(skip(self, intent), fields(intent = intent.name()))]
    pub async fn execute(&self, session_id: i64, intent: Intent) -> Outcome {
        let outcome = match intent {
            Intent::SetBase { code } => self.set_base(session_id, code).await,
            Intent::ShowBase => Ok(Reply::CurrentBase {
                base: self.sessions.base_currency(session_id).await,
            }),
            Intent::ShowRates { base } => self.show_rates(session_id, base).await,
            Intent::Convert { amount, from, to } => {
                self.convert(session_id, amount, from, to).await
            }
            Intent::Help => Ok(Reply::Help),
            Intent::Unknown => Ok(Reply::Fallback),
        };
        if let Err(ref failure) = outcome {
            warn!(session_id, failure = %failure, "Intent execution failed");
        }
        outcome
    }

    async fn fetch(&self, base: &CurrencyCode) -> Result<RateTable, ExecutionFailure> {
        Ok(self.rates.fetch(base).await?)
    }

    async fn resolve_base(&self, session_id: i64, explicit: Option<CurrencyCode>) -> CurrencyCode {
        match explicit {
            Some(code) => code,
            None => self.sessions.base_currency(session_id).await,
        }
    }

    async fn set_base(&self, session_id: i64, code: CurrencyCode) -> Outcome {
        let probe = self.fetch(&self.probe_base).await?;
        if !probe.contains(&code) {
            return Err(ExecutionFailure::UnsupportedCurrency { code });
        }
        self.sessions.set_base_currency(session_id, code.clone()).await;
        info!(session_id, base = %code, "step: base currency set");
        Ok(Reply::BaseSet { base: code })
    }

    async fn show_rates(&self, session_id: i64, base: Option<CurrencyCode>) -> Outcome {
        let base = self.resolve_base(session_id, base).await;
        let table = self.fetch(&base).await?;
        let quotes = WATCHED_CURRENCIES
            .iter()
            .filter_map(|c| CurrencyCode::parse(c).ok())
            .map(|code| RateQuote {
                rate: table.rate(&code).map(|r| round_to(r, 4)),
                code,
            })
            .collect();
        Ok(Reply::Rates {
            base,
            fetched_at: table.fetched_at,
            quotes,
        })
    }

    async fn convert(
        &self,
        session_id: i64,
        amount: Amount,
        from: Option<CurrencyCode>,
        to: CurrencyCode,
    ) -> Outcome {
        let from = self.resolve_base(session_id, from).await;
        let table = self.fetch(&from).await?;
        let rate = table
            .rate(&to)
            .ok_or_else(|| ExecutionFailure::UnsupportedCurrency { code: to.clone() })?;
        let result = round_to(amount.value() * rate, 2);
        if !result.is_finite() {
            return Err(ExecutionFailure::AmountOutOfRange { amount });
        }
        info!(session_id, from = %from, to = %to, amount = %amount, rate, result, "step: converted");
        Ok(Reply::Converted {
            amount,
            from,
            to,
            result,
        })
    }
}
