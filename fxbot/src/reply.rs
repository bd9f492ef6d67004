//! Executor outcomes: successful [`Reply`] payloads and [`ExecutionFailure`] kinds.
//!
//! Failure kinds stay distinct here even though the user-facing text for upstream failures is
//! uniform; see [`crate::format`].

use chrono::{DateTime, Utc};
use rate_client::{CurrencyCode, RateError};
use thiserror::Error;

use crate::command::Amount;

/// One row of a rates listing; `None` when the table has no entry for `code`.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub code: CurrencyCode,
    pub rate: Option<f64>,
}

/// Successful outcome of one turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    BaseSet {
        base: CurrencyCode,
    },
    CurrentBase {
        base: CurrencyCode,
    },
    Rates {
        base: CurrencyCode,
        fetched_at: DateTime<Utc>,
        /// Rates already rounded to 4 decimals.
        quotes: Vec<RateQuote>,
    },
    Converted {
        amount: Amount,
        from: CurrencyCode,
        to: CurrencyCode,
        /// Already rounded to 2 decimals.
        result: f64,
    },
    Help,
    /// Unrecognized command.
    Fallback,
    /// Inbound message was not plain text.
    TextOnly,
}

/// Failed outcome of one turn. Terminal for the turn only; session state is never touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExecutionFailure {
    #[error("unsupported currency: {code}")]
    UnsupportedCurrency { code: CurrencyCode },

    /// The converted value does not fit in an `f64`.
    #[error("amount out of range: {amount}")]
    AmountOutOfRange { amount: Amount },

    #[error("rate service unavailable: {0}")]
    ServiceUnavailable(#[from] RateError),
}

/// Outcome of executing one intent.
pub type Outcome = Result<Reply, ExecutionFailure>;
