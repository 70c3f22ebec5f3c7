//! # cowin-bot
//!
//! Telegram bot answering vaccination slot queries from the public CoWIN API.
//!
//! A message is parsed into a [`Command`]; data commands go through one [`Pipeline`]
//! (provider GET, response validation, column projection, boxed table rendering) and the reply
//! is delivered through the [`telegram_bot::Bot`] trait. District slot listings are paginated
//! five per page with inline buttons backed by [`PagerSessions`].

pub mod cli;
pub mod command;
pub mod config;
pub mod handler;
pub mod help;
pub mod pager;
pub mod pipeline;
pub mod runner;
pub mod table;

pub use command::{Command, Pincode, SlotDate};
pub use config::BotConfig;
pub use handler::{CowinHandler, RequestLogHandler};
pub use pager::{PagerSession, PagerSessions, PAGE_SIZE};
pub use pipeline::{Pipeline, Query};
pub use runner::{build_handler_chain, run_bot, run_query};
pub use table::Table;
