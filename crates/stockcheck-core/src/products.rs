use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One trackable product: a human-facing label and the retailer's SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub label: String,
    pub sku: String,
}

/// The product catalog as loaded from `products.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsFile {
    pub products: Vec<ProductConfig>,
}

impl ProductsFile {
    /// Look up a SKU by its catalog label.
    #[must_use]
    pub fn sku_for_label(&self, label: &str) -> Option<&str> {
        self.products
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.sku.as_str())
    }

    /// All configured SKUs, in catalog order.
    #[must_use]
    pub fn all_skus(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.sku.as_str()).collect()
    }
}

/// Load and validate the product catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_products(path: &Path) -> Result<ProductsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProductsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let products_file: ProductsFile = serde_yaml::from_str(&content)?;

    validate_products(&products_file)?;

    Ok(products_file)
}

fn validate_products(products_file: &ProductsFile) -> Result<(), ConfigError> {
    if products_file.products.is_empty() {
        return Err(ConfigError::Validation(
            "product catalog must contain at least one product".to_string(),
        ));
    }

    let mut seen_labels = HashSet::new();
    let mut seen_skus = HashSet::new();

    for product in &products_file.products {
        if product.label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "product label must be non-empty".to_string(),
            ));
        }

        if product.sku.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has an empty SKU",
                product.label
            )));
        }

        if !seen_labels.insert(product.label.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate product label: '{}'",
                product.label
            )));
        }

        if !seen_skus.insert(product.sku.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate SKU: '{}' (from product '{}')",
                product.sku, product.label
            )));
        }
    }

    Ok(())
}
