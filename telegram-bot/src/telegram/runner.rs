//! Dispatcher runner: converts teloxide messages and callback queries to core::Message, runs the
//! HandlerChain, and catches every request-scoped error at one boundary.

use crate::chain::HandlerChain;
use crate::core::{Bot as CoreBot, BotError, HandlerResponse, Message as CoreMessage, ToCoreMessage};
use anyhow::Result;
use std::sync::Arc;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Dependencies shared by the dispatcher endpoints.
#[derive(Clone)]
struct GatewayContext {
    chain: HandlerChain,
    bot: Arc<dyn CoreBot>,
}

/// Runs one event through the chain. Errors are logged and, when the error has a user-facing
/// notice, reported back to the originating chat; they never propagate further.
#[instrument(skip(chain, bot, message), fields(chat_id = message.chat.id))]
pub async fn dispatch_event(
    chain: &HandlerChain,
    bot: &dyn CoreBot,
    message: &CoreMessage,
) -> HandlerResponse {
    match chain.handle(message).await {
        Ok(response) => response,
        Err(e) => {
            report_error(bot, message, &e).await;
            HandlerResponse::Stop
        }
    }
}

/// Error boundary: logs the event context with the error and sends the error's notice.
pub async fn report_error(bot: &dyn CoreBot, message: &CoreMessage, err: &BotError) {
    warn!(
        user_id = message.user.id,
        chat_id = message.chat.id,
        source = message.source_label(),
        content = %message.content,
        error = %err,
        "Event caused error"
    );

    if let Some(notice) = err.user_notice() {
        if let Err(send_err) = bot.send_message(&message.chat, &notice).await {
            error!(
                chat_id = message.chat.id,
                error = %send_err,
                "Failed to deliver error notice"
            );
        }
    }
}

async fn on_message(msg: Message, ctx: GatewayContext) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    match msg.text() {
        Some(text) => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            message_content = %text,
            "Received message"
        ),
        None => {
            debug!(chat_id = core_msg.chat.id, "Received non-text message, ignored");
            return Ok(());
        }
    }

    dispatch_event(&ctx.chain, ctx.bot.as_ref(), &core_msg).await;
    Ok(())
}

async fn on_callback(bot: Bot, query: CallbackQuery, ctx: GatewayContext) -> ResponseResult<()> {
    // Clears the button spinner regardless of what the chain does with the data.
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }

    if query.data.is_none() {
        debug!("Callback query without data, ignored");
        return Ok(());
    }

    let core_msg = TelegramCallbackWrapper(&query).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        callback_data = %core_msg.content,
        "Received callback"
    );

    dispatch_event(&ctx.chain, ctx.bot.as_ref(), &core_msg).await;
    Ok(())
}

/// Starts long polling with the given teloxide Bot and HandlerChain; `reply_bot` delivers error
/// notices. Text messages and callback queries are routed to the chain; the process stops on
/// Ctrl-C / SIGINT.
#[instrument(skip(bot, handler_chain, reply_bot))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    reply_bot: Arc<dyn CoreBot>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Bot authenticated"),
        Err(e) => {
            error!(error = %e, "Failed to authenticate bot");
            return Err(e.into());
        }
    }

    let ctx = GatewayContext {
        chain: handler_chain,
        bot: reply_bot,
    };

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!("Dispatcher started, polling for updates");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Unhandled update kind");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}
