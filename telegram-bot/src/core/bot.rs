//! Messaging gateway abstraction.
//!
//! [`Bot`] is transport-agnostic; [`crate::TelegramBotAdapter`] implements it via teloxide and
//! tests substitute a recording mock.

use crate::core::error::{BotError, Result};
use crate::core::types::{Chat, Reply};
use async_trait::async_trait;

/// Sends and edits replies. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a formatted reply (optionally with pager controls) and returns the new message id.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<String>;
    /// Replaces text and controls of an already-sent message. `message_id` is transport-specific
    /// (Telegram numeric string).
    async fn edit_reply(&self, chat: &Chat, message_id: &str, reply: &Reply) -> Result<()>;
}

/// Parses a transport message id string into Telegram's numeric form.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Gateway(format!("Invalid message_id: {}", s)))
}
