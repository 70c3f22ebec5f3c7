//! Adapters from Telegram (teloxide) updates to core types.
//! Depends only on teloxide and the core type definitions.

use crate::core::{Chat, Message, MessageSource, ToCoreMessage, User};

/// Converts a teloxide user to a core [`User`].
pub fn to_core_user(user: &teloxide::types::User) -> User {
    User {
        id: user.id.0 as i64,
        username: user.username.clone(),
        first_name: Some(user.first_name.clone()),
    }
}

fn to_core_chat(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}

/// Wraps a teloxide text message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(to_core_user)
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                }),
            chat: to_core_chat(&self.0.chat),
            content: self.0.text().unwrap_or("").to_string(),
            source: MessageSource::Text,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Wraps a teloxide callback query (inline keyboard press) for conversion to core [`Message`].
///
/// The chat comes from the message that carried the keyboard; when Telegram does not expose it
/// the sender's private chat (same id as the user) is used.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let user = to_core_user(&self.0.from);
        let (chat, keyboard_message_id) = match self.0.message.as_ref() {
            Some(m) => (to_core_chat(m.chat()), Some(m.id().to_string())),
            None => (
                Chat {
                    id: user.id,
                    chat_type: "private".to_string(),
                },
                None,
            ),
        };
        Message {
            id: keyboard_message_id.clone().unwrap_or_default(),
            user,
            chat,
            content: self.0.data.clone().unwrap_or_default(),
            source: MessageSource::Callback {
                message_id: keyboard_message_id,
            },
            created_at: chrono::Utc::now(),
        }
    }
}
