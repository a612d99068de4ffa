//! The stock-check endpoint behind the web form.
//!
//! Accepts a zip code plus a set of catalog labels (or the `"all"` sentinel)
//! and returns one availability result per label. Validation happens before
//! any outbound network activity.

use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};
use stockcheck_fulfillment::AvailabilityResult;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// Sentinel label that expands to the whole catalog.
const ALL_PRODUCTS: &str = "all";

#[derive(Debug, Deserialize)]
pub(super) struct CheckStockRequest {
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub products: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct CheckStockData {
    pub zip_code: String,
    /// One entry per requested catalog label.
    pub results: BTreeMap<String, ProductAvailability>,
}

#[derive(Debug, Serialize)]
pub(super) struct ProductAvailability {
    pub sku: String,
    #[serde(flatten)]
    pub availability: AvailabilityResult,
}

pub(super) async fn check_stock(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CheckStockRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let zip_code = body.zip_code.trim();
    if zip_code.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "zip code is required",
        ));
    }

    let selected: Vec<&str> = body
        .products
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if selected.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "select at least one product",
        ));
    }

    // "all" expands to the whole catalog; unknown labels are skipped.
    let labels: Vec<String> = if selected.iter().any(|&l| l == ALL_PRODUCTS) {
        state
            .products
            .products
            .iter()
            .map(|p| p.label.clone())
            .collect()
    } else {
        selected.iter().map(|&l| l.to_string()).collect()
    };

    let resolved: Vec<(String, String)> = labels
        .into_iter()
        .filter_map(|label| {
            state
                .products
                .sku_for_label(&label)
                .map(|sku| (label, sku.to_string()))
        })
        .collect();

    tracing::info!(
        zip_code,
        products = resolved.len(),
        "checking stock for selected products"
    );

    let skus: Vec<String> = resolved.iter().map(|(_, sku)| sku.clone()).collect();
    let availabilities = state.checker.check_many(&skus, zip_code).await;

    let results: BTreeMap<String, ProductAvailability> = resolved
        .into_iter()
        .zip(availabilities)
        .map(|((label, sku), availability)| {
            (
                label,
                ProductAvailability { sku, availability },
            )
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data: CheckStockData {
                zip_code: zip_code.to_string(),
                results,
            },
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}
