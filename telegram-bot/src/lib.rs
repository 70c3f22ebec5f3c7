//! # telegram-bot
//!
//! Gateway layer for chat bots: core types ([`Message`], [`Reply`], [`Bot`], [`Handler`]),
//! the [`HandlerChain`], Telegram adapters and the dispatcher runner with its error boundary,
//! base config and tracing setup. Holds no application logic.

pub mod chain;
pub mod config;
pub mod core;
pub mod telegram;

pub use core::{
    init_tracing, parse_message_id, Bot, BotError, Chat, Handler, HandlerResponse, Message,
    MessageSource, PagerButton, PagerControls, Reply, Result, TextFormat, ToCoreMessage, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    dispatch_event, report_error, run_dispatcher, to_core_user, to_inline_keyboard,
    TelegramBotAdapter, TelegramCallbackWrapper, TelegramMessageWrapper,
};

pub use config::BaseConfig;
