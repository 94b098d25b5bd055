//! Retry policy shared by every backend call.
//!
//! One [`RetryPolicy`] is `(max_attempts, delay schedule, per-request timeout)`. The correction and reset
//! calls use [`RetryPolicy::correction`]; the warm-up probe uses the shorter [`RetryPolicy::health`].

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::error::{BackendError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delays: Vec<Duration>,
    timeout: Duration,
}

impl RetryPolicy {
    /// Validates and builds a policy.
    ///
    /// `delays[i]` is the wait before attempt `i`; it must start at zero and be strictly increasing.
    /// When there are more attempts than entries the last delay is reused.
    pub fn new(max_attempts: u32, delays: Vec<Duration>, timeout: Duration) -> Result<Self> {
        if max_attempts == 0 {
            return Err(BackendError::InvalidPolicy(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        match delays.first() {
            None => {
                return Err(BackendError::InvalidPolicy(
                    "delay schedule must not be empty".to_string(),
                ))
            }
            Some(first) if !first.is_zero() => {
                return Err(BackendError::InvalidPolicy(format!(
                    "first delay must be 0, got {:?}",
                    first
                )))
            }
            Some(_) => {}
        }
        if let Some(pair) = delays.windows(2).find(|w| w[1] <= w[0]) {
            return Err(BackendError::InvalidPolicy(format!(
                "delays must be strictly increasing: {:?} then {:?}",
                pair[0], pair[1]
            )));
        }
        if timeout.is_zero() {
            return Err(BackendError::InvalidPolicy(
                "timeout must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            max_attempts,
            delays,
            timeout,
        })
    }

    /// Correction and reset calls: 3 attempts, waits 0 / 2s / 5s, 90s per request so a cold backend can wake up.
    pub fn correction() -> Self {
        Self {
            max_attempts: 3,
            delays: vec![
                Duration::ZERO,
                Duration::from_millis(2000),
                Duration::from_millis(5000),
            ],
            timeout: Duration::from_secs(90),
        }
    }

    /// Warm-up health probe: 3 attempts, waits 0 / 1s / 3s, 10s per request.
    pub fn health() -> Self {
        Self {
            max_attempts: 3,
            delays: vec![
                Duration::ZERO,
                Duration::from_millis(1000),
                Duration::from_millis(3000),
            ],
            timeout: Duration::from_secs(10),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }

    /// Wait before the 0-indexed `attempt`. Attempt 0 never waits.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        self.delays
            .get(attempt as usize)
            .or_else(|| self.delays.last())
            .copied()
            .unwrap_or(Duration::ZERO)
    }

    /// Runs `op` until it succeeds or `max_attempts` is reached, sleeping per the schedule in between.
    ///
    /// `op` receives the 0-indexed attempt number. On exhaustion the last error is returned.
    pub async fn run<T, E, F, Fut>(&self, label: &str, mut op: F) -> std::result::Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
        E: Display,
    {
        let mut attempt = 0;
        loop {
            let delay = self.delay_for_attempt(attempt);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            match op(attempt).await {
                Ok(value) => {
                    if attempt > 0 {
                        info!(label, attempt = attempt + 1, "succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(e) if attempt + 1 >= self.max_attempts => {
                    error!(
                        label,
                        attempts = self.max_attempts,
                        error = %e,
                        "all attempts failed"
                    );
                    return Err(e);
                }
                Err(e) => {
                    let next_delay = self.delay_for_attempt(attempt + 1);
                    warn!(
                        label,
                        attempt = attempt + 1,
                        max_attempts = self.max_attempts,
                        next_delay_ms = next_delay.as_millis() as u64,
                        error = %e,
                        "attempt failed, retrying"
                    );
                    attempt += 1;
                }
            }
        }
    }
}
