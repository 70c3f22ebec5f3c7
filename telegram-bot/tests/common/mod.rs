//! Shared helpers for telegram-bot integration tests.

pub mod mock_bot;
