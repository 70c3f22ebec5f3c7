//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Replies go out with the requested
//! parse mode and pager buttons as an inline keyboard.

use crate::core::{
    parse_message_id, Bot as CoreBot, BotError, Chat, PagerControls, Reply, Result, TextFormat,
};
use async_trait::async_trait;
use teloxide::payloads::{EditMessageTextSetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Maps pager controls to a Telegram inline keyboard (one keyboard row per controls row).
pub fn to_inline_keyboard(controls: &PagerControls) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(controls.rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.data.clone()))
            .collect::<Vec<_>>()
    }))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Gateway(e.to_string()))?;
        Ok(())
    }

    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<String> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        if reply.format == TextFormat::Html {
            request = request.parse_mode(ParseMode::Html);
        }
        if let Some(controls) = &reply.controls {
            request = request.reply_markup(to_inline_keyboard(controls));
        }
        let sent = request
            .await
            .map_err(|e| BotError::Gateway(e.to_string()))?;
        debug!(chat_id = chat.id, message_id = %sent.id, "Reply sent");
        Ok(sent.id.to_string())
    }

    async fn edit_reply(&self, chat: &Chat, message_id: &str, reply: &Reply) -> Result<()> {
        let id = parse_message_id(message_id)?;
        let mut request =
            self.bot
                .edit_message_text(ChatId(chat.id), MessageId(id), reply.text.clone());
        if reply.format == TextFormat::Html {
            request = request.parse_mode(ParseMode::Html);
        }
        if let Some(controls) = &reply.controls {
            request = request.reply_markup(to_inline_keyboard(controls));
        }
        request
            .await
            .map_err(|e| BotError::Gateway(e.to_string()))?;
        Ok(())
    }
}
