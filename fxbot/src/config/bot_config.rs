//! BotConfig: BaseConfig + CurrencyAppExtensions. Use load() for env-based loading.

use anyhow::Result;
use rate_client::CurrencyCode;

use super::{AppExtensions, BaseConfig, CurrencyAppExtensions};

/// Bot config: BaseConfig + extensions.
pub struct BotConfig {
    pub base: BaseConfig,
    pub extensions: CurrencyAppExtensions,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let extensions = CurrencyAppExtensions::from_env()?;
        Ok(Self { base, extensions })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.extensions.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn extensions(&self) -> &dyn AppExtensions {
        &self.extensions
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn default_base_currency(&self) -> &CurrencyCode {
        &self.extensions.default_base_currency
    }
}
