pub mod app_config;
pub mod config;
pub mod products;

pub use app_config::{AppConfig, Environment, ProxyConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{load_products, ProductConfig, ProductsFile};

use thiserror::Error;

/// Errors raised while loading configuration or the product catalog.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read products file {path}: {source}")]
    ProductsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse products file: {0}")]
    ProductsFileParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
