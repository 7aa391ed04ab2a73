//! Integration tests for `CatalogClient`.
//!
//! Each test stands up a `wiremock` server in place of the catalog endpoint,
//! so no real network traffic is made.

use std::time::Duration;

use aether_client::{CatalogClient, ClientError, DETAIL_BATCH_COUNT, LISTING_COUNT};
use aether_core::{Category, CategorySelection};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base: &str) -> CatalogClient {
    CatalogClient::new(base, Duration::from_secs(5), Duration::from_secs(3600))
        .expect("failed to build test CatalogClient")
}

fn uncached_client(base: &str) -> CatalogClient {
    CatalogClient::new(base, Duration::from_secs(5), Duration::ZERO)
        .expect("failed to build test CatalogClient")
}

fn product_json(slug: &str, category: &str) -> serde_json::Value {
    json!({
        "id": format!("id-{slug}"),
        "category": category,
        "imageUrl": "https://loremflickr.com/400/533/shoes?lock=1",
        "brand": "Koch Group",
        "title": "Sleek Suede Loafers",
        "slug": slug,
        "description": "Built to last, the Sleek Suede Loafers ships in recyclable packaging.",
        "originalPrice": 80.0,
        "discountedPrice": 60.0,
        "discountPercentage": 25
    })
}

// ---------------------------------------------------------------------------
// Listing fetch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_requests_twelve_of_one_category() {
    let server = MockServer::start().await;
    let body: Vec<_> = (0..LISTING_COUNT)
        .map(|i| product_json(&format!("shoe-{i}"), "footwear"))
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("category", "footwear"))
        .and(query_param("count", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let products = test_client(&server.uri())
        .listing(Category::Footwear)
        .await
        .expect("listing");

    assert_eq!(products.len(), LISTING_COUNT);
    assert!(products.iter().all(|p| p.category == Category::Footwear));
}

#[tokio::test]
async fn listing_is_served_from_cache_inside_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("category", "eyewear"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([product_json("aviators", "eyewear")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let first = client.listing(Category::Eyewear).await.expect("first");
    let second = client.listing(Category::Eyewear).await.expect("second");

    assert_eq!(first, second);
    // `expect(1)` is verified when `server` drops.
}

#[tokio::test]
async fn cache_is_keyed_by_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("category", "footwear"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([product_json("boots", "footwear")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("category", "eyewear"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([product_json("shades", "eyewear")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let footwear = client.listing(Category::Footwear).await.expect("footwear");
    let eyewear = client.listing(Category::Eyewear).await.expect("eyewear");

    assert_eq!(footwear[0].slug, "boots");
    assert_eq!(eyewear[0].slug, "shades");
}

#[tokio::test]
async fn zero_window_refetches_every_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = uncached_client(&server.uri());
    client.listing(Category::Footwear).await.expect("first");
    client.listing(Category::Footwear).await.expect("second");
}

#[tokio::test]
async fn expired_entry_is_refetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = CatalogClient::new(
        &server.uri(),
        Duration::from_secs(5),
        Duration::from_millis(50),
    )
    .expect("client");
    client.listing(Category::Footwear).await.expect("first");
    tokio::time::sleep(Duration::from_millis(120)).await;
    client.listing(Category::Footwear).await.expect("second");
}

// ---------------------------------------------------------------------------
// Detail fetch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn product_by_slug_scans_a_mixed_batch() {
    let server = MockServer::start().await;
    let body = json!([
        product_json("round-frames", "eyewear"),
        product_json("sleek-suede-loafers", "footwear"),
        product_json("sleek-suede-loafers", "footwear"),
    ]);

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("category", "all"))
        .and(query_param("count", DETAIL_BATCH_COUNT.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let product = test_client(&server.uri())
        .product_by_slug("sleek-suede-loafers")
        .await
        .expect("product");

    assert_eq!(product.slug, "sleek-suede-loafers");
    assert_eq!(product.id, "id-sleek-suede-loafers");
    assert!((product.savings() - 20.0).abs() < 1e-9);
}

#[tokio::test]
async fn product_by_slug_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([product_json("boots", "footwear")])),
        )
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).product_by_slug("aviators").await;

    assert!(
        matches!(result, Err(ClientError::ProductNotFound { ref slug }) if slug == "aviators"),
        "expected ProductNotFound, got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// Upstream failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_error_is_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .fetch_products(5, CategorySelection::Mixed)
        .await;

    assert!(
        matches!(result, Err(ClientError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn failed_fetch_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([product_json("boots", "footwear")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.listing(Category::Footwear).await.is_err());
    let products = client.listing(Category::Footwear).await.expect("second attempt");
    assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).listing(Category::Eyewear).await;

    assert!(
        matches!(result, Err(ClientError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    let client = CatalogClient::new("http://127.0.0.1:1", Duration::from_secs(2), Duration::ZERO)
        .expect("client");

    let result = client.listing(Category::Footwear).await;

    assert!(
        matches!(result, Err(ClientError::Http(_))),
        "expected Http error, got: {result:?}"
    );
}
