//! Full bot config: BaseConfig + BackendConfig.

use anyhow::Result;

use super::{BackendConfig, BaseConfig};

#[derive(Debug, Clone)]
pub struct BotConfig {
    base: BaseConfig,
    backend: BackendConfig,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            base: BaseConfig::load(token)?,
            backend: BackendConfig::load()?,
        })
    }

    pub fn new(base: BaseConfig, backend: BackendConfig) -> Self {
        Self { base, backend }
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.backend.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn backend(&self) -> &BackendConfig {
        &self.backend
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }

    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }

    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }

    pub fn backend_url(&self) -> &str {
        &self.backend.backend_url
    }
}
