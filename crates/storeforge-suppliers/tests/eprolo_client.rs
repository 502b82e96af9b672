//! Integration tests for `EproloClient` using wiremock HTTP mocks.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storeforge_suppliers::{EproloClient, SearchQuery, SupplierClient, SupplierError};

fn test_client(base_url: &str) -> EproloClient {
    EproloClient::with_base_url(
        Some("test-key".to_string()),
        5,
        "storeforge-test/0.1",
        base_url,
    )
    .expect("client construction should not fail")
}

fn query(keyword: &str, page: u32, page_size: u32) -> SearchQuery {
    SearchQuery {
        keyword: keyword.to_string(),
        category_id: None,
        page,
        page_size,
    }
}

fn eprolo_item(n: usize) -> serde_json::Value {
    json!({
        "id": n,
        "name": format!("Gadget {n}"),
        "price": 12.5,
        "image": format!("https://cdn.eprolo.example/{n}.jpg"),
        "images": [format!("https://cdn.eprolo.example/{n}-alt.jpg")],
        "sku": format!("EP-{n}"),
        "category": "Gadgets"
    })
}

#[tokio::test]
async fn search_sends_bearer_auth_and_query_params() {
    let server = MockServer::start().await;

    let products: Vec<_> = (0..20).map(eprolo_item).collect();
    Mock::given(method("GET"))
        .and(path("/products/search"))
        .and(header("Authorization", "Bearer test-key"))
        .and(query_param("search", "gadget"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "products": products,
            "total": 45
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search(&query("gadget", 1, 12)).await.expect("search");

    assert_eq!(result.items.len(), 12);
    assert_eq!(result.total_count, 45);
    assert!(result.has_more);
    assert_eq!(result.items[0].id, "0");
    assert_eq!(result.items[0].supplier_name, "EPROLO");
    // EPROLO exposes no wholesale price, so the whole sell price is margin.
    assert_eq!(result.items[0].derived_profit, result.items[0].sell_price);
}

#[tokio::test]
async fn search_with_zero_matches_is_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!({"products": [], "total": 0})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search(&query("nothing", 1, 20)).await.expect("search");
    assert!(result.items.is_empty());
    assert!(!result.has_more);
}

#[tokio::test]
async fn search_maps_http_429_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/search"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.search(&query("gadget", 1, 20)).await.expect_err("should fail");

    // No Retry-After header: fall back to the default window.
    assert!(
        matches!(
            err,
            SupplierError::RateLimited {
                retry_after_secs: 60,
                ..
            }
        ),
        "expected RateLimited with default window, got: {err:?}"
    );
}

#[tokio::test]
async fn missing_credential_fails_before_any_request() {
    let server = MockServer::start().await;

    let client = EproloClient::with_base_url(None, 5, "storeforge-test/0.1", &server.uri())
        .expect("client construction should not fail");

    let err = client.search(&query("gadget", 1, 20)).await.expect_err("should fail");
    assert!(matches!(err, SupplierError::Config { .. }));
    assert!(
        server.received_requests().await.unwrap_or_default().is_empty(),
        "no request may reach the upstream when the credential is absent"
    );
}

#[tokio::test]
async fn blank_credential_counts_as_missing() {
    let server = MockServer::start().await;

    let client = EproloClient::with_base_url(
        Some("   ".to_string()),
        5,
        "storeforge-test/0.1",
        &server.uri(),
    )
    .expect("client construction should not fail");

    let err = client.categories().await.expect_err("should fail");
    assert!(matches!(err, SupplierError::Config { .. }));
}

#[tokio::test]
async fn get_details_returns_normalized_product() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&eprolo_item(42)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let product = client.get_details("42").await.expect("details");

    assert_eq!(product.id, "42");
    assert_eq!(product.title, "Gadget 42");
    assert_eq!(product.sell_price.to_string(), "12.5");
    assert_eq!(product.category, "Gadgets");
}

#[tokio::test]
async fn get_details_http_404_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_details("ghost").await.expect_err("should fail");

    assert!(
        matches!(err, SupplierError::NotFound { ref product_id, .. } if product_id == "ghost")
    );
}

#[tokio::test]
async fn create_order_passes_payload_through_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({"items": [{"id": "42", "qty": 1}]})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!({"orderId": "X123", "status": "created"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let confirmation = client
        .create_order(&json!({"items": [{"id": "42", "qty": 1}]}))
        .await
        .expect("order");

    assert_eq!(confirmation["orderId"].as_str(), Some("X123"));
    assert_eq!(confirmation["status"].as_str(), Some("created"));
}

#[tokio::test]
async fn create_order_surfaces_http_error_with_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(&json!({"message": "address incomplete"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .create_order(&json!({"items": []}))
        .await
        .expect_err("should fail");

    assert!(
        matches!(
            err,
            SupplierError::Upstream { status: 422, ref message, .. } if message == "address incomplete"
        ),
        "expected Upstream(422), got: {err:?}"
    );
}

#[tokio::test]
async fn categories_returns_id_name_pairs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            { "id": 1, "name": "Gadgets" },
            { "id": "apparel", "name": "Apparel" }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let categories = client.categories().await.expect("categories");

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, "1");
    assert_eq!(categories[1].name, "Apparel");
}
