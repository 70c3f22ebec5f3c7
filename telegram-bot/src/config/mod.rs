//! Bot configuration: Telegram connection and logging. Applications wrap [`BaseConfig`] with
//! their own settings.

mod base;


pub use base::BaseConfig;
