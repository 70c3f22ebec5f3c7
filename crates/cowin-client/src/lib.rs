//! # cowin-client
//!
//! Read-only client for the public CoWIN vaccination data API (`/api/v2`).
//!
//! [`DataProvider`] is the seam the bot depends on; [`CowinClient`] implements it with one
//! `reqwest` GET per call, an explicit timeout and no retries or caching.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cowin_client::{CowinClient, DataProvider, Endpoint, ProviderConfig};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = CowinClient::new(&ProviderConfig::default())?;
//!     let body = client.fetch(&Endpoint::States).await?;
//!     println!("{}", body["states"]);
//!     Ok(())
//! }
//! ```

mod config;
mod endpoint;
mod error;

pub use config::{ProviderConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use endpoint::Endpoint;
pub use error::ProviderError;

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Source of provider JSON. Implemented by [`CowinClient`]; tests substitute canned payloads.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Issues one GET for `endpoint` and returns the decoded JSON body.
    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ProviderError>;
}

/// HTTP client for the CoWIN API.
#[derive(Debug, Clone)]
pub struct CowinClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl CowinClient {
    /// Builds the client with the configured base URL, user agent and request timeout.
    pub fn new(config: &ProviderConfig) -> anyhow::Result<Self> {
        Self::with_timeout(config, Duration::from_secs(config.timeout_secs))
    }

    /// Like [`CowinClient::new`] with an explicit timeout (sub-second values are used by tests).
    pub fn with_timeout(config: &ProviderConfig, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: timeout.as_secs(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DataProvider for CowinClient {
    #[instrument(skip(self), fields(path = %endpoint.path()))]
    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint.path());
        info!(url = %endpoint.url(&self.base_url), "step: provider GET");

        let response = self
            .client
            .get(&url)
            .query(&endpoint.query())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Provider returned non-success status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.timeout_secs)
            } else {
                ProviderError::Decode(e.to_string())
            }
        })?;

        info!(status = status.as_u16(), "step: provider GET done");
        Ok(body)
    }
}

impl CowinClient {
    fn map_reqwest_error(&self, e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout(self.timeout_secs)
        } else {
            ProviderError::Network(e.to_string())
        }
    }
}
