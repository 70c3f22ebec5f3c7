//! Provider config. Loaded from env: COWIN_API_URL, COWIN_USER_AGENT, PROVIDER_TIMEOUT_SECS.

use anyhow::Result;
use std::env;

/// Public CoWIN API base.
pub const DEFAULT_BASE_URL: &str = "https://cdn-api.co-vin.in/api/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how to reach the data provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_user_agent() -> String {
    format!("cowin-bot/{}", env!("CARGO_PKG_VERSION"))
}

impl ProviderConfig {
    /// Loads from env; unset variables keep their defaults, unparsable ones are an error.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("COWIN_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let user_agent = env::var("COWIN_USER_AGENT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(default_user_agent);
        let timeout_secs = match env::var("PROVIDER_TIMEOUT_SECS") {
            Ok(s) => s.trim().parse().map_err(|_| {
                anyhow::anyhow!("PROVIDER_TIMEOUT_SECS must be a number of seconds, got {:?}", s)
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            base_url,
            user_agent,
            timeout_secs,
        })
    }

    /// base_url must parse as a URL; timeout must be positive.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("COWIN_API_URL is not a valid URL: {}", self.base_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("PROVIDER_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }
}
