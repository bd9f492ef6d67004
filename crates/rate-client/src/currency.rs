//! Three-letter currency codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A 3-letter alphabetic currency code, always uppercase.
///
/// Only the shape is checked here; whether a code is actually supported is decided by the rate
/// tables the upstream returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid currency code: {0:?} (expected 3 letters)")]
pub struct InvalidCurrencyCode(pub String);

impl CurrencyCode {
    /// US dollar; the default session base and the probe base used to validate codes.
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    /// Parses `s` (surrounding whitespace ignored, any case) into an uppercase code.
    pub fn parse(s: &str) -> Result<Self, InvalidCurrencyCode> {
        let trimmed = s.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(InvalidCurrencyCode(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = InvalidCurrencyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = InvalidCurrencyCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_to_uppercase() {
        assert_eq!(CurrencyCode::parse("eur").unwrap().as_str(), "EUR");
        assert_eq!(CurrencyCode::parse(" gBp ").unwrap().as_str(), "GBP");
        assert_eq!(CurrencyCode::parse("JPY").unwrap(), CurrencyCode::parse("jpy").unwrap());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(CurrencyCode::parse("").is_err());
        assert!(CurrencyCode::parse("EU").is_err());
        assert!(CurrencyCode::parse("EURO").is_err());
        assert!(CurrencyCode::parse("E1R").is_err());
        assert!(CurrencyCode::parse("€UR").is_err());
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let code: CurrencyCode = serde_json::from_str("\"chf\"").unwrap();
        assert_eq!(code.as_str(), "CHF");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"CHF\"");
        assert!(serde_json::from_str::<CurrencyCode>("\"SWISS\"").is_err());
    }
}
