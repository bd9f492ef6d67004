//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// `message_type` of plain text messages. Any other value is a non-text (media, service) message.
pub const TEXT_MESSAGE_TYPE: &str = "text";

/// A single inbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Text payload; empty for non-text messages.
    pub content: String,
    /// `"text"` or the media kind (`photo`, `sticker`, ...).
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// True when the message carries plain text.
    pub fn is_text(&self) -> bool {
        self.message_type == TEXT_MESSAGE_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of_type(message_type: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 1,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 1,
                chat_type: "private".to_string(),
            },
            content: String::new(),
            message_type: message_type.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_text() {
        assert!(message_of_type("text").is_text());
        assert!(!message_of_type("photo").is_text());
        assert!(!message_of_type("").is_text());
    }
}
