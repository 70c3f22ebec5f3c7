//! Provider error type.

use thiserror::Error;

/// Failure of one provider request. Every variant is fatal to that request; nothing is retried.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider request timed out after {0}s")]
    Timeout(u64),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid JSON from provider: {0}")]
    Decode(String),
}
