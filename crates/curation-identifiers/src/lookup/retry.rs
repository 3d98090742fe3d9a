//! Retry with exponential backoff for lookups
//!
//! Only errors that [`LookupError::is_retryable`] accepts are retried. Format,
//! checksum and not-found outcomes are returned immediately.

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

use super::error::LookupError;
use crate::config::LookupConfig;

/// Backoff settings for [`retry_async`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first one).
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&LookupConfig::default())
    }
}

impl From<&LookupConfig> for RetryPolicy {
    fn from(config: &LookupConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: Duration::from_millis(config.retry_base_delay_ms),
            max_delay: Duration::from_millis(config.retry_max_delay_ms),
        }
    }
}

impl RetryPolicy {
    /// Delay after the given failed attempt (0-indexed): base * 2^attempt, capped.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

/// Run `operation` until it succeeds, fails with a non-retryable error, or
/// the attempt budget is spent.
pub async fn retry_async<F, Fut, T>(policy: &RetryPolicy, mut operation: F) -> Result<T, LookupError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, LookupError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!("Lookup succeeded after {} attempts", attempt + 1);
                }
                return Ok(value);
            }
            Err(e) if !e.is_retryable() => {
                debug!("Lookup error is not retryable: {}", e);
                return Err(e);
            }
            Err(e) => {
                if attempt + 1 >= max_attempts {
                    warn!("All {} lookup attempts exhausted. Last error: {}", max_attempts, e);
                    return Err(e);
                }

                let delay = policy.delay_for(attempt);
                warn!(
                    "Lookup attempt {}/{} failed: {}. Retrying in {:?}",
                    attempt + 1,
                    max_attempts,
                    e,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
