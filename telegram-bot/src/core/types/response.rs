//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the delivered body so `after()` hooks
/// can log or inspect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// The message is not for this handler (no pattern matched).
    Ignore,
    /// Stop the chain; `text` was delivered to the chat.
    Reply(String),
}
