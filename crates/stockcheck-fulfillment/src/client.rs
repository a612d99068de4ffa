//! HTTP client for the retailer's store-availability endpoint.
//!
//! Wraps `reqwest` with the fixed request payload, the browser-like header
//! set the endpoint expects, and optional proxy support. This layer never
//! retries; the retry controller sits on top of it.

use std::time::Duration;

use reqwest::{Client, Url};
use stockcheck_core::{AppConfig, ProxyConfig};

use crate::error::FulfillmentError;
use crate::parse::flatten_availability;
use crate::request::AvailabilityRequest;
use crate::response::StoreAvailabilityResponse;
use crate::types::AvailabilityResult;

/// Origin header expected by the endpoint's bot-filtering heuristics.
const ORIGIN: &str = "https://www.bestbuy.com";

/// Timeout used by [`AvailabilityClient::fetch_availability`] when the
/// caller does not supply a per-attempt timeout.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

/// Client for the store-availability endpoint.
///
/// Use [`AvailabilityClient::from_app_config`] for production or
/// [`AvailabilityClient::with_endpoint`] to point at a mock server in tests.
pub struct AvailabilityClient {
    client: Client,
    endpoint: Url,
}

impl AvailabilityClient {
    /// Creates a client from application configuration, including the
    /// optional outbound proxy.
    ///
    /// # Errors
    ///
    /// Returns [`FulfillmentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FulfillmentError::InvalidEndpoint`] if the
    /// configured endpoint or proxy URL is invalid.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FulfillmentError> {
        Self::with_endpoint(
            &config.endpoint_url,
            &config.user_agent,
            config.proxy.as_ref(),
        )
    }

    /// Creates a client with an explicit endpoint URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FulfillmentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FulfillmentError::InvalidEndpoint`] if
    /// `endpoint_url` or the proxy URL is not a valid URL.
    pub fn with_endpoint(
        endpoint_url: &str,
        user_agent: &str,
        proxy: Option<&ProxyConfig>,
    ) -> Result<Self, FulfillmentError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);

        if let Some(proxy_config) = proxy {
            let proxy = reqwest::Proxy::all(proxy_config.url()).map_err(|e| {
                FulfillmentError::InvalidEndpoint {
                    url: format!("http://{}:{}", proxy_config.host, proxy_config.port),
                    reason: e.to_string(),
                }
            })?;
            // Residential proxies commonly terminate TLS themselves, so
            // certificate verification is relaxed only when a proxy is in use.
            builder = builder.proxy(proxy).danger_accept_invalid_certs(true);
        }

        let client = builder.build()?;
        let endpoint =
            Url::parse(endpoint_url).map_err(|e| FulfillmentError::InvalidEndpoint {
                url: endpoint_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    /// Fetches availability for one SKU at one zip code with the default
    /// request timeout.
    ///
    /// # Errors
    ///
    /// See [`AvailabilityClient::fetch_availability_with_timeout`].
    pub async fn fetch_availability(
        &self,
        sku: &str,
        postal_code: &str,
    ) -> Result<AvailabilityResult, FulfillmentError> {
        self.fetch_availability_with_timeout(sku, postal_code, DEFAULT_REQUEST_TIMEOUT)
            .await
    }

    /// Fetches availability for one SKU at one zip code.
    ///
    /// POSTs the fixed-shape payload, asserts a 2xx status, parses the body,
    /// and flattens it into offer lists. No retries happen here.
    ///
    /// # Errors
    ///
    /// - [`FulfillmentError::Http`] — network failure or timeout.
    /// - [`FulfillmentError::UnexpectedStatus`] — non-2xx response.
    /// - [`FulfillmentError::Deserialize`] — body is not the expected JSON.
    pub async fn fetch_availability_with_timeout(
        &self,
        sku: &str,
        postal_code: &str,
        timeout: Duration,
    ) -> Result<AvailabilityResult, FulfillmentError> {
        tracing::debug!(sku, postal_code, timeout_secs = timeout.as_secs(), "checking availability");

        let payload = AvailabilityRequest::new(sku, postal_code);
        let response = self
            .client
            .post(self.endpoint.clone())
            .timeout(timeout)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::ORIGIN, ORIGIN)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FulfillmentError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: StoreAvailabilityResponse =
            serde_json::from_str(&body).map_err(|e| FulfillmentError::Deserialize {
                context: format!("storeAvailability(sku={sku}, zip={postal_code})"),
                source: e,
            })?;

        Ok(flatten_availability(&parsed))
    }
}
