//! Retry controller for the availability client.
//!
//! [`run_with_retry`] wraps a fallible async operation with a bounded
//! attempt schedule. Each attempt gets its own timeout from the policy, and
//! transient failures (timeout, connection failure) back off exponentially
//! before the next attempt. Everything else — non-2xx statuses, malformed
//! bodies — is terminal and returned immediately without a retry.

use std::future::Future;
use std::time::Duration;

use stockcheck_core::AppConfig;

use crate::error::FulfillmentError;

/// Bounded retry schedule: one timeout per attempt, exponential backoff
/// between attempts.
///
/// The length of `attempt_timeouts` is the attempt bound, so the schedule
/// and the retry count cannot drift apart.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub attempt_timeouts: Vec<Duration>,
    /// Base for the backoff: the sleep after attempt `n` (0-indexed) is
    /// `backoff_base_secs * 2^n` seconds. No sleep after the last attempt.
    pub backoff_base_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempt_timeouts: vec![
                Duration::from_secs(45),
                Duration::from_secs(60),
                Duration::from_secs(90),
            ],
            backoff_base_secs: 1,
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            attempt_timeouts: config
                .attempt_timeout_secs
                .iter()
                .map(|&secs| Duration::from_secs(secs))
                .collect(),
            backoff_base_secs: config.backoff_base_secs,
        }
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.attempt_timeouts.len()
    }
}

/// Returns `true` for failures that are worth another attempt.
///
/// **Transient (retried):** request timeout, connection-establishment
/// failure.
///
/// **Terminal (returned immediately):** non-2xx statuses (the service gave a
/// definitive answer), malformed responses (retrying won't fix the shape),
/// invalid configuration.
pub(crate) fn is_transient(err: &FulfillmentError) -> bool {
    match err {
        FulfillmentError::Http(e) => e.is_timeout() || e.is_connect(),
        FulfillmentError::UnexpectedStatus { .. }
        | FulfillmentError::Deserialize { .. }
        | FulfillmentError::InvalidEndpoint { .. }
        | FulfillmentError::RetriesExhausted { .. } => false,
    }
}

/// Sleep before the attempt after attempt `n`: `base * 2^n` seconds, shift
/// capped to avoid overflow on absurd configs.
pub(crate) fn backoff_delay(base_secs: u64, attempt: usize) -> Duration {
    Duration::from_secs(base_secs.saturating_mul(1u64 << attempt.min(62)))
}

/// Runs `operation` once per entry in the policy's timeout schedule.
///
/// The operation receives its attempt's timeout. Success short-circuits;
/// terminal errors propagate immediately; when every attempt fails with a
/// transient error the result is [`FulfillmentError::RetriesExhausted`] —
/// a normal, expected terminal outcome, not a crash.
pub(crate) async fn run_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, FulfillmentError>
where
    F: FnMut(Duration) -> Fut,
    Fut: Future<Output = Result<T, FulfillmentError>>,
{
    let attempts = policy.max_attempts();
    let mut last_error: Option<FulfillmentError> = None;

    for (attempt, &timeout) in policy.attempt_timeouts.iter().enumerate() {
        match operation(timeout).await {
            Ok(value) => return Ok(value),
            Err(err) if is_transient(&err) => {
                if attempt + 1 < attempts {
                    let delay = backoff_delay(policy.backoff_base_secs, attempt);
                    tracing::warn!(
                        attempt,
                        attempts,
                        delay_secs = delay.as_secs(),
                        error = %err,
                        "transient network error — retrying after backoff"
                    );
                    tokio::time::sleep(delay).await;
                } else {
                    tracing::warn!(attempt, attempts, error = %err, "final attempt failed");
                }
                last_error = Some(err);
            }
            Err(err) => return Err(err),
        }
    }

    Err(FulfillmentError::RetriesExhausted {
        attempts,
        last_error: last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempts were made".to_string()),
    })
}
