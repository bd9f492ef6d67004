//! Amount of money as typed by the user.

use std::fmt;

/// A finite, non-negative amount that keeps the text it was parsed from, so replies echo
/// `100.50` rather than `100.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    value: f64,
    text: String,
}

impl Amount {
    /// Parses a decimal literal. Returns `None` for non-numbers and values that overflow `f64`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let value: f64 = text.parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(Self {
            value,
            text: text.to_string(),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
