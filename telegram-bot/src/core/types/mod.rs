//! Core types: incoming message, outgoing reply, handler response, and Handler trait.

mod handler;
mod message;
mod reply;
mod response;

pub use handler::{Handler, ToCoreMessage};
pub use message::{Chat, Message, MessageSource, User};
pub use reply::{PagerButton, PagerControls, Reply, TextFormat};
pub use response::HandlerResponse;
