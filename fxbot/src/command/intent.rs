//! Structured meaning of one user utterance.

use rate_client::CurrencyCode;

use super::Amount;

/// Exactly one intent is produced per parse. Omitted currencies are resolved by the executor.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetBase { code: CurrencyCode },
    ShowBase,
    ShowRates { base: Option<CurrencyCode> },
    Convert {
        amount: Amount,
        from: Option<CurrencyCode>,
        to: CurrencyCode,
    },
    Help,
    /// Anything unrecognized or malformed.
    Unknown,
}

impl Intent {
    /// Stable label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SetBase { .. } => "set_base",
            Intent::ShowBase => "show_base",
            Intent::ShowRates { .. } => "show_rates",
            Intent::Convert { .. } => "convert",
            Intent::Help => "help",
            Intent::Unknown => "unknown",
        }
    }
}
