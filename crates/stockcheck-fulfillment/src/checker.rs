//! High-level stock checking: retry-wrapped availability lookups that always
//! come back as a structured [`AvailabilityResult`].

use std::time::Duration;

use stockcheck_core::AppConfig;

use crate::client::AvailabilityClient;
use crate::error::FulfillmentError;
use crate::retry::{run_with_retry, RetryPolicy};
use crate::types::AvailabilityResult;

/// Availability client plus retry policy, shared by the server and the CLI
/// so there is exactly one retry strategy in the system.
pub struct StockChecker {
    client: AvailabilityClient,
    policy: RetryPolicy,
    /// Pause between consecutive SKUs in [`StockChecker::check_many`]. A
    /// deliberate throughput throttle for the remote service's rate
    /// limiting, not a correctness requirement.
    inter_request_delay: Duration,
}

impl StockChecker {
    #[must_use]
    pub fn new(
        client: AvailabilityClient,
        policy: RetryPolicy,
        inter_request_delay: Duration,
    ) -> Self {
        Self {
            client,
            policy,
            inter_request_delay,
        }
    }

    /// Builds the checker (client, retry policy, inter-request delay) from
    /// application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed; see
    /// [`AvailabilityClient::from_app_config`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FulfillmentError> {
        Ok(Self::new(
            AvailabilityClient::from_app_config(config)?,
            RetryPolicy::from_app_config(config),
            Duration::from_millis(config.inter_request_delay_ms),
        ))
    }

    /// Checks availability for one SKU, retrying transient network failures
    /// per the policy.
    ///
    /// Never fails: terminal errors — including exhausted retries — are
    /// absorbed into the result's `error` field so callers always get a
    /// uniformly-shaped value.
    pub async fn check(&self, sku: &str, postal_code: &str) -> AvailabilityResult {
        let outcome = run_with_retry(&self.policy, |timeout| {
            self.client
                .fetch_availability_with_timeout(sku, postal_code, timeout)
        })
        .await;

        match outcome {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(sku, postal_code, error = %err, "availability check failed");
                AvailabilityResult::from_error(err.to_string())
            }
        }
    }

    /// Checks several SKUs strictly sequentially, sleeping the configured
    /// delay between consecutive calls (not after the last) to stay under
    /// the remote service's rate limit.
    ///
    /// Results are returned in the same order as `skus`.
    pub async fn check_many(&self, skus: &[String], postal_code: &str) -> Vec<AvailabilityResult> {
        let mut results = Vec::with_capacity(skus.len());
        for (index, sku) in skus.iter().enumerate() {
            if index > 0 && !self.inter_request_delay.is_zero() {
                tokio::time::sleep(self.inter_request_delay).await;
            }
            results.push(self.check(sku, postal_code).await);
        }
        results
    }
}
