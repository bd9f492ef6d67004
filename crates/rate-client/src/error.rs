//! Upstream failure taxonomy.

use thiserror::Error;

/// Why a rate table could not be obtained. Never retried by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// Transport failure: connect, timeout, body read, or an undecodable body.
    #[error("exchange rate service unreachable: {0}")]
    Unreachable(String),

    /// The service answered but its `result` was not the success sentinel.
    #[error("exchange rate service rejected the request: {detail}")]
    Rejected { detail: String },
}

impl RateError {
    /// Short cause label for logs: `unreachable` or `rejected`.
    pub fn cause(&self) -> &'static str {
        match self {
            RateError::Unreachable(_) => "unreachable",
            RateError::Rejected { .. } => "rejected",
        }
    }
}
