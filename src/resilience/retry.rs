//! Fixed-interval retry policy.

use std::future::Future;
use std::time::Duration;
use tracing::instrument;

use crate::errors::{ImagesError, ImagesResult};

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default pause between attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(500);

/// Retry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Pause between consecutive attempts.
    pub interval: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}

impl RetryConfig {
    pub fn new(max_retries: u32, interval: Duration) -> Self {
        Self {
            max_retries,
            interval,
        }
    }

    /// Creates a configuration with no retries.
    pub fn no_retries() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }
}

/// Runs an operation until it succeeds, fails with a non-retryable error,
/// or exhausts `max_retries`. Attempts are strictly sequential.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    #[instrument(skip(self, operation), fields(max_retries = self.config.max_retries))]
    pub async fn execute<F, Fut, T>(&self, operation: F) -> ImagesResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = ImagesResult<T>>,
    {
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    if !err.is_retryable() || attempt >= self.config.max_retries {
                        if attempt > 0 {
                            tracing::warn!(attempts = attempt + 1, error = %err, "Giving up");
                        }
                        return Err(err);
                    }

                    let delay = self.delay_for(&err);

                    tracing::info!(
                        attempt = attempt + 1,
                        max_retries = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Retrying after error"
                    );

                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// A server-provided `Retry-After` longer than the interval wins.
    fn delay_for(&self, error: &ImagesError) -> Duration {
        error
            .retry_after_secs()
            .map(Duration::from_secs)
            .filter(|retry_after| *retry_after > self.config.interval)
            .unwrap_or(self.config.interval)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}
