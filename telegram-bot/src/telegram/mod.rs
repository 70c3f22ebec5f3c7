//! Telegram layer: update adapters, Bot implementation, dispatcher runner with error boundary.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{to_core_user, TelegramCallbackWrapper, TelegramMessageWrapper};
pub use bot_adapter::{to_inline_keyboard, TelegramBotAdapter};
pub use runner::{dispatch_event, report_error, run_dispatcher};
