//! Mock inventory API tests.
//!
//! These tests use wiremock to simulate the inventory API and check the
//! request shape, error classification, and the full paginated walk without
//! network access.

use std::time::Duration;

use gamepass_core::error::TransportError;
use gamepass_core::{
    Error, InventorySource, InventoryUrl, PageCursor, UserId, fetch_created_assets,
};
use gamepass_inventory::{
    GAME_PASS_ASSET_TYPE, HttpInventory, InventoryClient, PAGE_SIZE, SORT_ORDER,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INVENTORY_PATH: &str = "/v2/users/42/inventory";

/// Helper to create an inventory source pointed at a mock server.
fn mock_inventory(server: &MockServer) -> HttpInventory {
    mock_inventory_with_timeout(server, Duration::from_secs(5))
}

fn mock_inventory_with_timeout(server: &MockServer, timeout: Duration) -> HttpInventory {
    let base = InventoryUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    HttpInventory::new(InventoryClient::with_timeout(base, timeout).unwrap())
}

// ============================================================================
// Single Page Tests
// ============================================================================

#[tokio::test]
async fn test_first_page_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .and(query_param("assetTypes", GAME_PASS_ASSET_TYPE.to_string()))
        .and(query_param("limit", PAGE_SIZE.to_string()))
        .and(query_param("sortOrder", SORT_ORDER))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"assetId": 1, "creatorId": 42},
                {"assetId": 2, "creatorId": 7}
            ],
            "nextPageCursor": "abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = mock_inventory(&server);
    let page = source.fetch_page(UserId::new(42), None).await.unwrap();

    assert_eq!(page.records.len(), 2);
    assert_eq!(page.records[1].creator_id, Some(7));
    assert_eq!(page.next_cursor.unwrap().as_str(), "abc");
}

#[tokio::test]
async fn test_cursor_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .and(query_param("cursor", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "nextPageCursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = mock_inventory(&server);
    let cursor = PageCursor::from_next(Some("abc".to_string()));
    let page = source
        .fetch_page(UserId::new(42), cursor.as_ref())
        .await
        .unwrap();

    assert!(page.records.is_empty());
    assert!(page.next_cursor.is_none());
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_error_status_with_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": [{"code": 11, "message": "You don't have permissions to view the specified user's inventory."}]
        })))
        .mount(&server)
        .await;

    let source = mock_inventory(&server);
    let err = source.fetch_page(UserId::new(42), None).await.unwrap_err();

    assert_eq!(err.upstream_status(), Some(403));
    let msg = err.to_string();
    assert!(msg.contains("[11]"), "{msg}");
    assert!(msg.contains("permissions"), "{msg}");
}

#[tokio::test]
async fn test_non_json_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let source = mock_inventory(&server);
    let err = source.fetch_page(UserId::new(42), None).await.unwrap_err();

    assert_eq!(err.upstream_status(), Some(500));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let source = mock_inventory(&server);
    let err = source.fetch_page(UserId::new(42), None).await.unwrap_err();

    assert!(
        matches!(err, Error::Transport(TransportError::Decode { .. })),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_slow_page_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [], "nextPageCursor": null}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let source = mock_inventory_with_timeout(&server, Duration::from_millis(100));
    let err = source.fetch_page(UserId::new(42), None).await.unwrap_err();

    assert!(
        matches!(
            err,
            Error::Transport(TransportError::Timeout { duration_ms: 100 })
        ),
        "{err:?}"
    );
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_walks_all_pages_and_filters_by_creator() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"assetId": 1, "creatorId": 42},
                {"assetId": 2, "creatorId": 7}
            ],
            "nextPageCursor": "abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .and(query_param("cursor", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"assetId": 3, "creatorId": 42}],
            "nextPageCursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = mock_inventory(&server);
    let outcome = fetch_created_assets(&source, UserId::new(42)).await;

    assert!(outcome.is_complete());
    assert_eq!(outcome.asset_ids(), vec![1, 3]);
}

#[tokio::test]
async fn test_error_status_mid_pagination_stops_walk() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"assetId": 10, "creatorId": 42}],
            "nextPageCursor": "p2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .and(query_param("cursor", "p2"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .and(query_param("cursor", "p3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"assetId": 30, "creatorId": 42}],
            "nextPageCursor": null
        })))
        .expect(0)
        .mount(&server)
        .await;

    let source = mock_inventory(&server);
    let outcome = fetch_created_assets(&source, UserId::new(42)).await;

    assert_eq!(outcome.asset_ids(), vec![10]);
    assert_eq!(
        outcome.truncation_cause().and_then(Error::upstream_status),
        Some(429)
    );
}

#[tokio::test]
async fn test_malformed_page_mid_pagination_stops_walk() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"assetId": 10, "creatorId": 42}],
            "nextPageCursor": "p2"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .and(query_param("cursor", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": [truncated"))
        .mount(&server)
        .await;

    let source = mock_inventory(&server);
    let outcome = fetch_created_assets(&source, UserId::new(42)).await;

    assert_eq!(outcome.asset_ids(), vec![10]);
    assert!(matches!(
        outcome.truncation_cause(),
        Some(Error::Transport(_))
    ));
}

#[tokio::test]
async fn test_unreachable_upstream_yields_empty_truncated_result() {
    // Nothing listens on port 1
    let base = InventoryUrl::new("http://127.0.0.1:1").unwrap();
    let source = HttpInventory::new(InventoryClient::new(base).unwrap());

    let outcome = fetch_created_assets(&source, UserId::new(42)).await;

    assert!(outcome.records.is_empty());
    assert!(matches!(
        outcome.truncation_cause(),
        Some(Error::Transport(_))
    ));
}
