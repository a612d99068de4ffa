mod check;
mod products;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use stockcheck_core::ProductsFile;
use stockcheck_fulfillment::StockChecker;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<StockChecker>,
    pub products: Arc<ProductsFile>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    products_configured: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/products", get(products::list_products))
        .route("/api/v1/check", post(check::check_stock))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData {
                status: "ok",
                products_configured: state.products.products.len(),
            },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use stockcheck_core::ProductConfig;
    use stockcheck_fulfillment::{AvailabilityClient, RetryPolicy};
    use tower::ServiceExt;

    use super::*;

    /// Builds an `AppState` whose checker points at `endpoint` with a
    /// single fast attempt and no inter-request delay.
    pub(crate) fn test_state(endpoint: &str) -> AppState {
        let client = AvailabilityClient::with_endpoint(endpoint, "test-agent", None)
            .expect("client construction should not fail");
        let checker = StockChecker::new(
            client,
            RetryPolicy {
                attempt_timeouts: vec![Duration::from_secs(5)],
                backoff_base_secs: 0,
            },
            Duration::ZERO,
        );
        let products = ProductsFile {
            products: vec![
                ProductConfig {
                    label: "black".to_string(),
                    sku: "6612728".to_string(),
                },
                ProductConfig {
                    label: "grey".to_string(),
                    sku: "6612730".to_string(),
                },
            ],
        };
        AppState {
            checker: Arc::new(checker),
            products: Arc::new(products),
        }
    }

    pub(crate) async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&bytes).expect("json parse")
    }

    #[test]
    fn api_error_validation_error_maps_to_bad_request() {
        let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_unknown_code_maps_to_internal_error() {
        let response = ApiError::new("req-1", "mystery", "boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_reports_catalog_size() {
        // Nothing listens on this endpoint; health never calls out.
        let app = build_app(test_state("http://127.0.0.1:9"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["products_configured"], 2);
        assert!(json["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn responses_echo_the_request_id_header() {
        let app = build_app(test_state("http://127.0.0.1:9"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("x-request-id", "req-abc")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .map(|v| v.to_str().map_err(|_| ())),
            Some(Ok("req-abc"))
        );
        let json = body_json(response).await;
        assert_eq!(json["meta"]["request_id"], "req-abc");
    }
}
