//! Retry helper for transient failures
//!
//! Retries an async operation with linear backoff. Client-classified errors
//! (4xx-equivalent) are never retried; only transient failures are.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Retry policy: attempt count and base delay
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay before the next attempt: base_delay * attempt (linear backoff)
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

/// Run `operation` until it succeeds, retrying transient failures.
///
/// `is_retryable` decides whether an error is worth another attempt;
/// non-retryable errors are returned immediately. The final error is
/// returned once attempts are exhausted.
pub async fn retry_with_backoff<T, E, F, Fut, P>(
    policy: RetryPolicy,
    is_retryable: P,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= policy.max_attempts || !is_retryable(&err) => {
                return Err(err);
            }
            Err(err) => {
                warn!(attempt, error = %err, "operation failed, retrying");
                tokio::time::sleep(policy.delay_for(attempt)).await;
                attempt += 1;
            }
        }
    }
}
