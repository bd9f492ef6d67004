//! Ordered, first-match-wins rule table mapping raw text to an [`Intent`].
//!
//! Rules are data: each has a name, a case-insensitive pattern and a builder. A rule whose pattern
//! does not match, or whose builder rejects the captures, does not apply and evaluation moves on.
//! When no rule applies the result is [`Intent::Unknown`].

use regex::{Captures, Regex};
use rate_client::CurrencyCode;

use super::{Amount, Intent};

/// Seam between the dispatcher and command parsing.
pub trait IntentParser: Send + Sync {
    fn parse(&self, text: &str) -> Intent;
}

struct Rule {
    name: &'static str,
    pattern: Regex,
    build: fn(&Captures<'_>) -> Option<Intent>,
}

/// Pure, deterministic parser over a fixed rule table.
pub struct CommandParser {
    rules: Vec<Rule>,
}

fn code_at(caps: &Captures<'_>, group: usize) -> Option<CurrencyCode> {
    caps.get(group)
        .and_then(|m| CurrencyCode::parse(m.as_str()).ok())
}

fn build_set_base(caps: &Captures<'_>) -> Option<Intent> {
    Some(Intent::SetBase {
        code: code_at(caps, 1)?,
    })
}

fn build_show_base(_: &Captures<'_>) -> Option<Intent> {
    Some(Intent::ShowBase)
}

/// A `for <word>` clause must name a valid code; a bare `exchange rates` uses the session base.
fn build_show_rates(caps: &Captures<'_>) -> Option<Intent> {
    let base = match caps.get(1) {
        Some(_) => Some(code_at(caps, 1)?),
        None => None,
    };
    Some(Intent::ShowRates { base })
}

fn build_convert(caps: &Captures<'_>) -> Option<Intent> {
    let amount = Amount::parse(caps.get(1)?.as_str())?;
    Some(Intent::Convert {
        amount,
        from: code_at(caps, 2),
        to: code_at(caps, 3)?,
    })
}

fn build_help(_: &Captures<'_>) -> Option<Intent> {
    Some(Intent::Help)
}

/// Rule table in priority order.
const RULES: &[(&str, &str, fn(&Captures<'_>) -> Option<Intent>)] = &[
    (
        "set_base",
        r"(?i)\bset\s+base\s+currency\s+to\s+([a-z]{3})\b",
        build_set_base,
    ),
    ("show_base", r"(?i)current\s+base", build_show_base),
    (
        "show_rates",
        r"(?i)exchange\s+rates(?:\s+for\s+([a-z]+)\b)?",
        build_show_rates,
    ),
    (
        "convert",
        r"(?i)\bconvert\s+(\d+(?:\.\d+)?)\s+(?:([a-z]{3})\s+)?to\s+([a-z]{3})\b",
        build_convert,
    ),
    ("help", r"(?i)help|commands", build_help),
];

impl CommandParser {
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .map(|(name, pattern, build)| Rule {
                name: *name,
                pattern: Regex::new(pattern).expect("command rule patterns are valid"),
                build: *build,
            })
            .collect();
        Self { rules }
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    /// Name of the first rule that applies to `text`, if any.
    pub fn matching_rule(&self, text: &str) -> Option<&'static str> {
        self.evaluate(text).map(|(name, _)| name)
    }

    fn evaluate(&self, text: &str) -> Option<(&'static str, Intent)> {
        self.rules.iter().find_map(|rule| {
            let caps = rule.pattern.captures(text)?;
            (rule.build)(&caps).map(|intent| (rule.name, intent))
        })
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentParser for CommandParser {
    fn parse(&self, text: &str) -> Intent {
        self.evaluate(text)
            .map(|(_, intent)| intent)
            .unwrap_or(Intent::Unknown)
    }
}
