use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Serialize;

use super::{ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
pub(super) struct ProductItem {
    pub label: String,
    pub sku: String,
}

/// Lists the configured product catalog so the form can render its choices.
pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let items: Vec<ProductItem> = state
        .products
        .products
        .iter()
        .map(|p| ProductItem {
            label: p.label.clone(),
            sku: p.sku.clone(),
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse {
            data: items,
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::super::tests::{body_json, test_state};
    use super::super::build_app;

    #[tokio::test]
    async fn lists_catalog_in_order() {
        let app = build_app(test_state("http://127.0.0.1:9"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/products")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let json = body_json(response).await;
        let data = json["data"].as_array().expect("data array");
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["label"], "black");
        assert_eq!(data[0]["sku"], "6612728");
        assert_eq!(data[1]["label"], "grey");
    }
}
