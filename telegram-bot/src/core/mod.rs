//! Core types and traits: Handler, Bot, Message, Reply, HandlerResponse, error, logger.
//! Transport-agnostic.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageSource, PagerButton, PagerControls, Reply,
    TextFormat, ToCoreMessage, User,
};
