//! Conversions from teloxide types to core types.

use fxbot_core::{Chat, Message, ToCoreMessage, ToCoreUser, User, TEXT_MESSAGE_TYPE};

/// Converts a Telegram user to a core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Converts a Telegram message to a core message, keeping its content kind in `message_type`.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

/// Content kind of a Telegram message: `"text"` or the media/service kind.
pub fn message_type_of(msg: &teloxide::types::Message) -> &'static str {
    if msg.text().is_some() {
        TEXT_MESSAGE_TYPE
    } else if msg.photo().is_some() {
        "photo"
    } else if msg.sticker().is_some() {
        "sticker"
    } else if msg.voice().is_some() {
        "voice"
    } else if msg.video().is_some() {
        "video"
    } else if msg.audio().is_some() {
        "audio"
    } else if msg.document().is_some() {
        "document"
    } else if msg.location().is_some() {
        "location"
    } else {
        "other"
    }
}

fn chat_type_of(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type_of(&self.0.chat).to_string(),
            },
            content: self.0.text().unwrap_or("").to_string(),
            message_type: message_type_of(self.0).to_string(),
            created_at: self.0.date,
        }
    }
}
