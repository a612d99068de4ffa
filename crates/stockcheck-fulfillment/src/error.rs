use thiserror::Error;

/// Errors raised while checking store availability.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    /// Network or TLS failure from the underlying HTTP client. Timeouts and
    /// connection failures are transient and retried; anything else is
    /// terminal.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote endpoint answered with a non-2xx status. Never retried:
    /// the service is reachable and has given a definitive answer.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured endpoint URL could not be parsed.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Every attempt failed with a transient network error.
    #[error("all {attempts} attempts failed with transient network errors; last: {last_error}")]
    RetriesExhausted { attempts: usize, last_error: String },
}
