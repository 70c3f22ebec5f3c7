//! Chain handlers: [`CowinHandler`] answers commands, [`RequestLogHandler`] logs each event's
//! outcome.

use std::sync::Arc;

use async_trait::async_trait;
use telegram_bot::{Bot, BotError, Handler, HandlerResponse, Message, MessageSource, Result};
use tracing::{debug, info, instrument};

use crate::command::Command;
use crate::pager::{PagerSession, PagerSessions};
use crate::pipeline::Pipeline;

/// Routes a message to its command, runs the pipeline and delivers the reply.
///
/// Returns `Ignore` for text that is not a command so the chain can fall through.
pub struct CowinHandler {
    bot: Arc<dyn Bot>,
    pipeline: Pipeline,
    pager: Arc<PagerSessions>,
}

impl CowinHandler {
    pub fn new(bot: Arc<dyn Bot>, pipeline: Pipeline, pager: Arc<PagerSessions>) -> Self {
        Self {
            bot,
            pipeline,
            pager,
        }
    }

    async fn first_district_page(&self, message: &Message, command: &Command) -> Result<String> {
        let Command::FindByDistrict { date, district_id } = command else {
            return Err(BotError::Validation("not a district query".to_string()));
        };
        let reply = self
            .pipeline
            .district_page(*district_id, date, 0, true)
            .await?;
        let message_id = self.bot.send_reply(&message.chat, &reply).await?;
        self.pager
            .insert(
                message.chat.id,
                &message_id,
                PagerSession {
                    district_id: *district_id,
                    date: *date,
                },
            )
            .await;
        Ok(reply.text)
    }

    async fn turn_page(&self, message: &Message, page: usize) -> Result<String> {
        let message_id = match &message.source {
            MessageSource::Callback {
                message_id: Some(id),
            } => id.as_str(),
            _ => {
                return Err(BotError::Validation(
                    "page buttons only work on a find_by_district_id result".to_string(),
                ))
            }
        };
        let session = self
            .pager
            .get(message.chat.id, message_id)
            .await
            .ok_or_else(|| {
                BotError::Validation(
                    "pager expired, please run find_by_district_id again".to_string(),
                )
            })?;
        info!(
            chat_id = message.chat.id,
            district_id = session.district_id,
            page,
            "step: pager page requested"
        );
        let reply = self
            .pipeline
            .district_page(session.district_id, &session.date, page, false)
            .await?;
        self.bot
            .edit_reply(&message.chat, message_id, &reply)
            .await?;
        Ok(reply.text)
    }
}

#[async_trait]
impl Handler for CowinHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = Command::parse(message)? else {
            debug!("no command matched, ignoring");
            return Ok(HandlerResponse::Ignore);
        };
        info!(command = command.name(), "step: command matched");

        let text = match &command {
            Command::Page { page } => self.turn_page(message, *page).await?,
            Command::FindByDistrict { .. } => self.first_district_page(message, &command).await?,
            other => {
                let replies = self.pipeline.replies_for(other).await?;
                for reply in &replies {
                    self.bot.send_reply(&message.chat, reply).await?;
                }
                replies
                    .into_iter()
                    .map(|r| r.text)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        };

        info!(command = command.name(), reply_len = text.len(), "step: reply delivered");
        Ok(HandlerResponse::Reply(text))
    }
}

/// Logs every event entering the chain and the response it ended with.
pub struct RequestLogHandler;

#[async_trait]
impl Handler for RequestLogHandler {
    /// Never claims the event; the outcome is decided by the other handlers.
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Ignore)
    }

    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = message.user.username.as_deref().unwrap_or(""),
            chat_id = message.chat.id,
            source = message.source_label(),
            content = %message.content,
            "Received event"
        );
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Reply(_) => "replied",
            HandlerResponse::Ignore => "ignored",
            HandlerResponse::Stop => "stopped",
            HandlerResponse::Continue => "unhandled",
        };
        info!(chat_id = message.chat.id, outcome, "Event handled");
        Ok(())
    }
}
