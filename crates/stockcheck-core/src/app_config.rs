use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Outbound HTTP proxy with embedded credentials.
///
/// Only constructed when host, username, and password are all configured;
/// a partially-configured proxy is treated as no proxy at all.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl ProxyConfig {
    /// Proxy URL with the credentials embedded, as HTTP proxies expect.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "http://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port
        )
    }
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

// ProxyConfig's Debug impl handles credential redaction, so the derived
// impl is safe to log.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub products_path: PathBuf,
    /// Store-availability endpoint URL. Overridable so tests can point at a
    /// mock server; the default is the retailer's production endpoint.
    pub endpoint_url: String,
    /// User-Agent sent on outbound availability requests. The remote service
    /// applies bot-filtering heuristics, so the default mimics a browser.
    pub user_agent: String,
    pub proxy: Option<ProxyConfig>,
    /// Per-attempt request timeouts, one entry per attempt. The length of
    /// this list is the retry bound.
    pub attempt_timeout_secs: Vec<u64>,
    pub backoff_base_secs: u64,
    pub inter_request_delay_ms: u64,
}
