//! Backend config: base URL, retry policies for correction and health calls, reply chunk size.

use anyhow::{Context, Result};
use backend_client::RetryPolicy;
use std::env;
use std::time::Duration;

use super::env_or;
use crate::dispatcher::DEFAULT_MAX_CHUNK_LEN;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// BACKEND_URL
    pub backend_url: String,
    /// CORRECT_TIMEOUT_SECS, CORRECT_MAX_ATTEMPTS, CORRECT_BACKOFF_MS
    pub correction_policy: RetryPolicy,
    /// HEALTH_TIMEOUT_SECS, HEALTH_MAX_ATTEMPTS, HEALTH_BACKOFF_MS
    pub health_policy: RetryPolicy,
    /// REPLY_CHUNK_SIZE
    pub reply_chunk_size: usize,
}

/// Parses a comma-separated millisecond schedule such as `0,2000,5000`.
pub fn parse_backoff_ms(raw: &str) -> Result<Vec<Duration>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .map(Duration::from_millis)
                .with_context(|| format!("invalid backoff entry {:?}", s))
        })
        .collect()
}

/// Builds one policy from `{prefix}_TIMEOUT_SECS`, `{prefix}_MAX_ATTEMPTS` and `{prefix}_BACKOFF_MS`.
fn load_policy(prefix: &str, defaults: RetryPolicy) -> Result<RetryPolicy> {
    let timeout_secs = env_or(
        &format!("{}_TIMEOUT_SECS", prefix),
        defaults.timeout().as_secs(),
    )?;
    let max_attempts = env_or(&format!("{}_MAX_ATTEMPTS", prefix), defaults.max_attempts())?;
    let backoff_var = format!("{}_BACKOFF_MS", prefix);
    let delays = match env::var(&backoff_var) {
        Ok(raw) if !raw.trim().is_empty() => {
            parse_backoff_ms(&raw).with_context(|| format!("{} is invalid", backoff_var))?
        }
        _ => defaults.delays().to_vec(),
    };

    RetryPolicy::new(max_attempts, delays, Duration::from_secs(timeout_secs))
        .with_context(|| format!("{}_* retry settings are invalid", prefix))
}

impl BackendConfig {
    /// Load from environment variables; every value has a default.
    pub fn load() -> Result<Self> {
        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let correction_policy = load_policy("CORRECT", RetryPolicy::correction())?;
        let health_policy = load_policy("HEALTH", RetryPolicy::health())?;
        let reply_chunk_size = env_or("REPLY_CHUNK_SIZE", DEFAULT_MAX_CHUNK_LEN)?;

        Ok(Self {
            backend_url,
            correction_policy,
            health_policy,
            reply_chunk_size,
        })
    }

    /// Validate config (backend URL parses, chunk size is positive).
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.backend_url).is_err() {
            anyhow::bail!("BACKEND_URL is not a valid URL: {}", self.backend_url);
        }
        if self.reply_chunk_size == 0 {
            anyhow::bail!("REPLY_CHUNK_SIZE must be greater than 0");
        }
        Ok(())
    }
}
