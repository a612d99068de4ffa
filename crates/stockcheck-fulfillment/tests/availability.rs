//! Integration tests for the availability client and retry controller using
//! wiremock HTTP mocks.

use std::time::Duration;

use stockcheck_fulfillment::{AvailabilityClient, FulfillmentError, RetryPolicy, StockChecker};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(endpoint: &str) -> AvailabilityClient {
    AvailabilityClient::with_endpoint(endpoint, "test-agent", None)
        .expect("client construction should not fail")
}

fn fast_checker(endpoint: &str, attempts: usize, timeout_ms: u64) -> StockChecker {
    StockChecker::new(
        test_client(endpoint),
        RetryPolicy {
            attempt_timeouts: vec![Duration::from_millis(timeout_ms); attempts],
            backoff_base_secs: 0,
        },
        Duration::ZERO,
    )
}

fn stocked_response() -> serde_json::Value {
    serde_json::json!({
        "ispu": {
            "locations": [{
                "id": "100",
                "name": "Store A",
                "city": "New York",
                "state": "NY",
                "address": "123 Main St",
                "distance": 1.2
            }],
            "items": [{
                "locations": [{
                    "locationId": "100",
                    "availability": {
                        "fulfillmentType": "PICKUP",
                        "availablePickupQuantity": 5,
                        "minDate": "2026-08-25"
                    }
                }]
            }]
        }
    })
}

#[tokio::test]
async fn returns_pickup_offers_for_stocked_sku() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(serde_json::json!({
            "zipCode": "10001",
            "items": [{ "sku": "6612728", "quantity": 1 }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stocked_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .fetch_availability("6612728", "10001")
        .await
        .expect("availability check should succeed");

    assert_eq!(result.pickup_stores.len(), 1);
    assert_eq!(result.pickup_stores[0].store.name, "Store A");
    assert_eq!(result.pickup_stores[0].quantity, 5);
    assert!(result.ship_stores.is_empty());
    assert!(result.error.is_none());
}

#[tokio::test]
async fn response_without_ispu_yields_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .fetch_availability("6612728", "10001")
        .await
        .expect("no-data response is not an error");

    assert!(result.pickup_stores.is_empty());
    assert!(result.ship_stores.is_empty());
    assert!(result.error.is_none());
}

#[tokio::test]
async fn non_2xx_status_is_a_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_availability("6612728", "10001").await;

    match result {
        Err(FulfillmentError::UnexpectedStatus { status, .. }) => assert_eq!(status, 403),
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_2xx_status_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let checker = fast_checker(&server.uri(), 3, 1_000);
    let result = checker.check("6612728", "10001").await;

    let error = result.error.expect("result should carry the error");
    assert!(error.contains("500"), "error should name the status: {error}");
    assert!(result.pickup_stores.is_empty());
}

#[tokio::test]
async fn malformed_body_is_terminal_after_a_single_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let checker = fast_checker(&server.uri(), 3, 1_000);
    let result = checker.check("6612728", "10001").await;

    let error = result.error.expect("result should carry the error");
    assert!(
        error.contains("deserialization"),
        "error should describe the parse failure: {error}"
    );
}

#[tokio::test]
async fn timeout_then_success_takes_exactly_two_attempts() {
    let server = MockServer::start().await;

    // First attempt: response slower than the attempt timeout.
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(stocked_response())
                .set_delay(Duration::from_secs(5)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stocked_response()))
        .mount(&server)
        .await;

    let checker = StockChecker::new(
        test_client(&server.uri()),
        RetryPolicy {
            attempt_timeouts: vec![Duration::from_millis(300), Duration::from_secs(5)],
            backoff_base_secs: 0,
        },
        Duration::ZERO,
    );
    let result = checker.check("6612728", "10001").await;

    assert!(result.error.is_none(), "second attempt should succeed");
    assert_eq!(result.pickup_stores.len(), 1);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn exhausted_retries_surface_as_error_result_after_three_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(stocked_response())
                .set_delay(Duration::from_secs(5)),
        )
        .expect(3)
        .mount(&server)
        .await;

    let checker = fast_checker(&server.uri(), 3, 200);
    let result = checker.check("6612728", "10001").await;

    let error = result.error.expect("exhaustion must surface in the result");
    assert!(
        error.contains("3 attempts"),
        "error should describe the exhausted schedule: {error}"
    );
    assert!(result.pickup_stores.is_empty());
    assert!(result.ship_stores.is_empty());
}

#[tokio::test]
async fn check_many_returns_results_in_sku_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "items": [{ "sku": "6612728" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stocked_response()))
        .mount(&server)
        .await;

    // The second SKU has no data anywhere.
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "items": [{ "sku": "6612730" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let checker = fast_checker(&server.uri(), 1, 5_000);
    let skus = vec!["6612728".to_string(), "6612730".to_string()];
    let results = checker.check_many(&skus, "10001").await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].pickup_stores.len(), 1);
    assert!(results[1].pickup_stores.is_empty());
    assert!(results[1].error.is_none());
}
