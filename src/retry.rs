//! Bounded retry executor for transiently failing link operations.
//!
//! Radio stacks routinely refuse register, send, and descriptor operations
//! for a moment and then accept the identical call. The executor wraps any
//! zero-argument boolean operation with a fixed-count, fixed-delay retry
//! loop: no exponential backoff, no jitter. What "failure" means is the
//! caller's business; the executor only looks at the returned boolean.
//!
//! The loop suspends the calling task at every delay, so it must never be
//! driven from a context that also services timing-sensitive link-layer
//! callbacks.

use std::{future::Future, time::Duration};

use log::{debug, warn};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Fixed-count, fixed-delay retry settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries granted after the initial attempt.
    pub max_retries: u32,
    /// Uniform delay between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Create a policy with an explicit retry count and delay.
    #[must_use]
    pub const fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Total number of attempts the policy permits.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 { self.max_retries + 1 }
}

impl Default for RetryPolicy {
    fn default() -> Self { Self::new(5, Duration::from_millis(500)) }
}

/// Run `operation` until it reports success or the policy is exhausted.
///
/// Returns the final boolean result: `true` as soon as any attempt
/// succeeds, `false` once the initial attempt and every granted retry have
/// failed.
pub async fn retry<F, Fut>(policy: RetryPolicy, mut operation: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    for attempt in 0..policy.max_attempts() {
        if operation().await {
            return true;
        }
        if attempt < policy.max_retries {
            debug!("attempt {attempt} failed; retrying in {:?}", policy.delay);
            sleep(policy.delay).await;
        }
    }
    warn!("operation still failing after {} retries", policy.max_retries);
    false
}

/// [`retry`] that additionally aborts when `token` is cancelled.
///
/// Cancellation between attempts or during a delay yields `false` without
/// invoking the operation again. Sessions cancel their token on close so no
/// retry loop outlives the link it was servicing.
pub async fn retry_cancellable<F, Fut>(
    policy: RetryPolicy,
    token: &CancellationToken,
    mut operation: F,
) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    for attempt in 0..policy.max_attempts() {
        if token.is_cancelled() {
            debug!("retry loop cancelled before attempt {attempt}");
            return false;
        }
        if operation().await {
            return true;
        }
        if attempt < policy.max_retries {
            tokio::select! {
                () = token.cancelled() => {
                    debug!("retry loop cancelled while waiting to retry");
                    return false;
                }
                () = sleep(policy.delay) => {}
            }
        }
    }
    warn!("operation still failing after {} retries", policy.max_retries);
    false
}
