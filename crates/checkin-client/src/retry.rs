use std::future::Future;
use std::time::Duration;

use checkin_config::ClientConfig;

use crate::error::Result;
use crate::timeout::with_timeout;

/// Exponential backoff policy for transport failures
///
/// Only failures where no response was received are retried. The delay
/// before retry `n` (zero-based) is `initial_backoff * 2^n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; 0 means exactly one attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Deadline for each individual attempt
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

impl RetryPolicy {
    pub const fn from_config(config: &ClientConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_backoff: config.initial_backoff,
            timeout: config.timeout,
        }
    }

    /// Same policy with a different retry budget
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Delay to wait after the failed attempt with index `attempt`
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.initial_backoff.saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Run `operation` until it succeeds, fails with a non-transport error,
    /// or the retry budget is spent
    ///
    /// `operation` receives the zero-based attempt index and is invoked once
    /// per attempt. Every attempt runs under the policy's timeout; a timed-out
    /// attempt counts as a transport failure. When the budget is exhausted the
    /// last failure is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first non-transport error, or the last transport error
    /// once retries are exhausted
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;

        loop {
            match with_timeout(self.timeout, operation(attempt)).await {
                Ok(value) => return Ok(value),
                Err(error) if error.is_transport() && attempt < self.max_retries => {
                    let delay = self.backoff_delay(attempt);

                    tracing::warn!(
                        attempt = attempt + 1,
                        retries_left = self.max_retries - attempt,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %error,
                        "transport failure, retrying"
                    );

                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => {
                    if error.is_transport() {
                        tracing::warn!(attempts = attempt + 1, error = %error, "retries exhausted");
                    }
                    return Err(error);
                }
            }
        }
    }
}
