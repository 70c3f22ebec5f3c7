//! Mock implementation of [`telegram_bot::Bot`] for integration tests.
//!
//! Records every delivery so tests can assert on the text a chat would have received without
//! hitting Telegram.

use async_trait::async_trait;
use std::sync::Mutex;
use telegram_bot::{Bot, BotError, Chat, Reply, Result};

/// One recorded delivery.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Delivery {
    Plain { chat_id: i64, text: String },
    Sent { chat_id: i64, reply: Reply },
    Edited { chat_id: i64, message_id: String, reply: Reply },
}

/// Mock Bot that records deliveries; `fail` makes every call return a gateway error.
#[derive(Default)]
pub struct MockBot {
    pub deliveries: Mutex<Vec<Delivery>>,
    pub fail: bool,
}

#[allow(dead_code)]
impl MockBot {
    pub fn failing() -> Self {
        Self {
            deliveries: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn plain_texts(&self) -> Vec<String> {
        self.deliveries
            .lock()
            .unwrap()
            .iter()
            .filter_map(|d| match d {
                Delivery::Plain { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.fail {
            return Err(BotError::Gateway("mock failure".to_string()));
        }
        self.deliveries.lock().unwrap().push(Delivery::Plain {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<String> {
        if self.fail {
            return Err(BotError::Gateway("mock failure".to_string()));
        }
        let mut deliveries = self.deliveries.lock().unwrap();
        deliveries.push(Delivery::Sent {
            chat_id: chat.id,
            reply: reply.clone(),
        });
        Ok(deliveries.len().to_string())
    }

    async fn edit_reply(&self, chat: &Chat, message_id: &str, reply: &Reply) -> Result<()> {
        if self.fail {
            return Err(BotError::Gateway("mock failure".to_string()));
        }
        self.deliveries.lock().unwrap().push(Delivery::Edited {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            reply: reply.clone(),
        });
        Ok(())
    }
}
