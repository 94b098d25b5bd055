//! Bot configuration: BaseConfig (Telegram + log) + BackendConfig (backend URL, retry policies, chunk size).

mod backend;
mod base;
mod bot_config;


pub use backend::{parse_backoff_ms, BackendConfig};
pub use base::BaseConfig;
pub use bot_config::BotConfig;

use anyhow::Result;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Reads `name` and parses it; `default` when unset or blank. A value that does not parse is an error.
fn env_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} has an invalid value {:?}: {}", name, raw, e)),
        _ => Ok(default),
    }
}
