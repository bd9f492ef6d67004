//! Response formatter: pure functions from outcomes to outbound text.

use chrono::Local;

use crate::reply::{ExecutionFailure, Outcome, Reply};

pub const TEXT_ONLY_NOTICE: &str = "Sorry, I can only respond to text messages.";

pub const SERVICE_UNAVAILABLE_TEXT: &str =
    "Sorry, the exchange rate service is unavailable right now. Please try again later.";

pub const HELP_TEXT: &str = "Here is what I can do:\n\
• set base currency to <CODE> (e.g. set base currency to EUR)\n\
• current base\n\
• exchange rates [for <CODE>]\n\
• convert <amount> [<FROM>] to <TO> (e.g. convert 100 USD to EUR)\n\
• help";

pub const FALLBACK_TEXT: &str = "Sorry, I didn't understand that. Try \"convert 100 USD to EUR\", \
\"exchange rates\" or \"help\".";

const MISSING_RATE: &str = "N/A";

pub fn render_reply(reply: &Reply) -> String {
    match reply {
        Reply::BaseSet { base } => format!("Base currency set to {}.", base),
        Reply::CurrentBase { base } => format!("Your current base currency is {}.", base),
        Reply::Rates {
            base,
            fetched_at,
            quotes,
        } => {
            let time = fetched_at.with_timezone(&Local).format("%H:%M:%S");
            let mut text = format!("Exchange rates for 1 {} (as of {}):", base, time);
            for quote in quotes {
                let rate = quote
                    .rate
                    .map(|r| format!("{:.4}", r))
                    .unwrap_or_else(|| MISSING_RATE.to_string());
                text.push_str(&format!("\n{}: {}", quote.code, rate));
            }
            text
        }
        Reply::Converted {
            amount,
            from,
            to,
            result,
        } => format!("{} {} = {:.2} {}", amount, from, result, to),
        Reply::Help => HELP_TEXT.to_string(),
        Reply::Fallback => FALLBACK_TEXT.to_string(),
        Reply::TextOnly => TEXT_ONLY_NOTICE.to_string(),
    }
}

pub fn render_failure(failure: &ExecutionFailure) -> String {
    match failure {
        ExecutionFailure::UnsupportedCurrency { code } => {
            format!("Sorry, {} is not a supported currency.", code)
        }
        ExecutionFailure::AmountOutOfRange { amount } => {
            format!("Sorry, {} is too large to convert.", amount)
        }
        ExecutionFailure::ServiceUnavailable(_) => SERVICE_UNAVAILABLE_TEXT.to_string(),
    }
}

pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Ok(reply) => render_reply(reply),
        Err(failure) => render_failure(failure),
    }
}
