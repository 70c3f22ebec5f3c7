//! Mock [`telegram_bot::Bot`] recording what each chat would have received.

use async_trait::async_trait;
use std::sync::Mutex;
use telegram_bot::{Bot, BotError, Chat, Reply, Result};

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Delivery {
    Plain { chat_id: i64, text: String },
    Sent { chat_id: i64, message_id: String, reply: Reply },
    Edited { chat_id: i64, message_id: String, reply: Reply },
}

/// Sent replies get message ids "100", "101", ...; `fail` makes every call a gateway error.
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

    pub fn sent_replies(&self) -> Vec<Reply> {
        self.deliveries
            .lock()
            .unwrap()
            .iter()
            .filter_map(|d| match d {
                Delivery::Sent { reply, .. } => Some(reply.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn all(&self) -> Vec<Delivery> {
        self.deliveries.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }

    pub fn last_reply(&self) -> Option<Reply> {
        self.deliveries
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|d| match d {
                Delivery::Sent { reply, .. } | Delivery::Edited { reply, .. } => Some(reply.clone()),
                Delivery::Plain { .. } => None,
            })
    }

    pub fn last_sent_id(&self) -> Option<String> {
        self.deliveries
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|d| match d {
                Delivery::Sent { message_id, .. } => Some(message_id.clone()),
                _ => None,
            })
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
        let message_id = (100 + deliveries.len()).to_string();
        deliveries.push(Delivery::Sent {
            chat_id: chat.id,
            message_id: message_id.clone(),
            reply: reply.clone(),
        });
        Ok(message_id)
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
