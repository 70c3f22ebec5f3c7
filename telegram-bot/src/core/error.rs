//! Error types for the bot core.
//!
//! [`BotError`] is the single request-scoped error: every handler failure maps onto one of its
//! variants so the runner's error boundary can decide what (if anything) to tell the user.

use thiserror::Error;

/// Top-level error (validation, data provider, empty result, gateway, config, IO).
#[derive(Error, Debug)]
pub enum BotError {
    /// Command text did not actually carry usable parameters.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Data provider failed: non-success status, network failure, timeout or malformed payload.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider succeeded but returned nothing where at least one record is required.
    #[error("No results: {0}")]
    EmptyResult(String),

    /// Reply could not be delivered through the messaging gateway.
    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BotError {
    /// Short, user-facing notice for this error. `None` when the user should not be told
    /// (gateway failures cannot be reported through the gateway anyway).
    pub fn user_notice(&self) -> Option<String> {
        match self {
            BotError::Validation(msg) => Some(format!("Invalid request: {}", msg)),
            BotError::EmptyResult(_) => {
                Some("No results found for this query. Try another date or location.".to_string())
            }
            BotError::Provider(_) => Some(
                "The vaccination data service is unavailable right now. Please try again later."
                    .to_string(),
            ),
            BotError::Gateway(_) | BotError::Config(_) | BotError::Io(_) => None,
        }
    }
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
