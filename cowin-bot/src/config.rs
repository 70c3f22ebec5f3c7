//! Application config: Telegram base settings, provider settings and pager TTL, from env.

use std::env;
use std::time::Duration;

use anyhow::Result;
use cowin_client::ProviderConfig;
use telegram_bot::BaseConfig;

use crate::pager::DEFAULT_PAGER_TTL_SECS;

/// Default log file path.
pub const DEFAULT_LOG_FILE: &str = "logs/cowin-bot.log";

/// Everything the bot process needs, built once at startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub provider: ProviderConfig,
    /// PAGER_TTL_SECS
    pub pager_ttl_secs: u64,
}

impl BotConfig {
    /// Loads from env. `token` overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token, DEFAULT_LOG_FILE)?;
        let provider = ProviderConfig::from_env()?;
        let pager_ttl_secs = match env::var("PAGER_TTL_SECS") {
            Ok(s) => s.trim().parse().map_err(|_| {
                anyhow::anyhow!("PAGER_TTL_SECS must be a number of seconds, got {:?}", s)
            })?,
            Err(_) => DEFAULT_PAGER_TTL_SECS,
        };
        Ok(Self {
            base,
            provider,
            pager_ttl_secs,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.provider.validate()?;
        if self.pager_ttl_secs == 0 {
            anyhow::bail!("PAGER_TTL_SECS must be greater than 0");
        }
        Ok(())
    }

    pub fn pager_ttl(&self) -> Duration {
        Duration::from_secs(self.pager_ttl_secs)
    }
}
