//! Command interpretation: [`Intent`], [`Amount`] and the ordered-rule [`CommandParser`].

mod amount;
mod intent;
mod parser;

pub use amount::Amount;
pub use intent::Intent;
pub use parser::{CommandParser, IntentParser};
