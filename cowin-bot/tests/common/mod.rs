//! Shared helpers for cowin-bot integration tests.

pub mod fake_provider;
pub mod mock_bot;
