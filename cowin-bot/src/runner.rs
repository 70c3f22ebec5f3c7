//! Process entry points: the long-running bot and one-shot queries.

use std::sync::Arc;

use cowin_client::{CowinClient, DataProvider, ProviderConfig};
use telegram_bot::{init_tracing, run_dispatcher, Bot, BotError, HandlerChain, TelegramBotAdapter};
use tracing::info;

use crate::command::Command;
use crate::config::BotConfig;
use crate::handler::{CowinHandler, RequestLogHandler};
use crate::pager::PagerSessions;
use crate::pipeline::Pipeline;

/// Chain: request logging, then the command handler.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    provider: Arc<dyn DataProvider>,
    pager: Arc<PagerSessions>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(RequestLogHandler))
        .add_handler(Arc::new(CowinHandler::new(
            bot,
            Pipeline::new(provider),
            pager,
        )))
}

/// Starts the bot and blocks until Ctrl-C.
pub async fn run_bot(config: BotConfig) -> anyhow::Result<()> {
    config.validate()?;
    init_tracing(&config.base.log_file)?;

    info!(
        log_file = %config.base.log_file,
        provider = %config.provider.base_url,
        pager_ttl_secs = config.pager_ttl_secs,
        "Starting cowin-bot"
    );

    let teloxide_bot = config.base.build_teloxide_bot();
    let reply_bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let provider: Arc<dyn DataProvider> = Arc::new(CowinClient::new(&config.provider)?);
    let pager = Arc::new(PagerSessions::new(config.pager_ttl()));

    let chain = build_handler_chain(reply_bot.clone(), provider, pager);
    run_dispatcher(teloxide_bot, chain, reply_bot).await
}

/// Runs one typed command against the provider and returns the printable table.
pub async fn run_query(provider: Arc<dyn DataProvider>, text: &str) -> anyhow::Result<String> {
    let command = Command::parse_text(text)?
        .ok_or_else(|| anyhow::anyhow!("not a recognized command: {}", text))?;
    let pipeline = Pipeline::new(provider);
    let output = match &command {
        Command::Help => crate::help::help_text(),
        Command::Page { .. } => {
            return Err(BotError::Validation("page requests need a chat".to_string()).into())
        }
        other => {
            let query = crate::pipeline::Query::for_command(other)
                .ok_or_else(|| anyhow::anyhow!("{} has no data query", other.name()))?;
            pipeline.table(&query).await?.render()
        }
    };
    Ok(output)
}

/// `cowin-bot query`: provider settings from env, no Telegram token needed.
pub async fn query_from_env(text: &str) -> anyhow::Result<String> {
    let config = ProviderConfig::from_env()?;
    config.validate()?;
    let provider: Arc<dyn DataProvider> = Arc::new(CowinClient::new(&config)?);
    run_query(provider, text).await
}
