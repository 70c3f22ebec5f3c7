//! Incoming event model: who sent it, where, and whether it is a typed message or a
//! keyboard callback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sender identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

/// Chat the event came from; replies are addressed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Where the event's `content` came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageSource {
    /// Text typed by the user.
    Text,
    /// Inline keyboard callback. `content` holds the callback data; `message_id` is the bot
    /// message that carried the keyboard (absent when Telegram no longer exposes it).
    Callback { message_id: Option<String> },
}

/// One incoming event, created per update and discarded after handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub source: MessageSource,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Builds a text message (used by the CLI `query` command and tests).
    pub fn text(chat_id: i64, user_id: i64, content: impl Into<String>) -> Self {
        Self {
            id: "0".to_string(),
            user: User {
                id: user_id,
                username: None,
                first_name: None,
            },
            chat: Chat {
                id: chat_id,
                chat_type: "private".to_string(),
            },
            content: content.into(),
            source: MessageSource::Text,
            created_at: Utc::now(),
        }
    }

    /// Builds a callback event for the keyboard attached to `message_id`.
    pub fn callback(
        chat_id: i64,
        user_id: i64,
        message_id: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            source: MessageSource::Callback {
                message_id: Some(message_id.into()),
            },
            ..Self::text(chat_id, user_id, data)
        }
    }

    pub fn is_callback(&self) -> bool {
        matches!(self.source, MessageSource::Callback { .. })
    }

    /// Label used in log fields.
    pub fn source_label(&self) -> &'static str {
        match self.source {
            MessageSource::Text => "text",
            MessageSource::Callback { .. } => "callback",
        }
    }
}
