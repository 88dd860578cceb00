//! Product HTTP Route Tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`:
//! - `GET /products` with and without `limit`
//! - `GET /products/:pid` found, missing and malformed
//! - 500 with a JSON error body when the products file is corrupt

use std::fs;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use shelfdb::http_server::HttpServer;
use shelfdb::store::ProductStore;
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

fn seeded_router(temp_dir: &TempDir, contents: &str) -> Router {
    let path = temp_dir.path().join("products.json");
    fs::write(&path, contents).unwrap();
    HttpServer::new(ProductStore::new(path)).router()
}

fn three_products() -> String {
    json!([
        {"id": 1, "title": "A", "price": 10},
        {"id": 2, "title": "B", "price": 20},
        {"id": 3, "title": "C", "price": 30}
    ])
    .to_string()
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// GET /products
// =============================================================================

#[tokio::test]
async fn test_list_all_products() {
    let temp_dir = TempDir::new().unwrap();
    let router = seeded_router(&temp_dir, &three_products());

    let (status, body) = get_json(router, "/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_with_limit_takes_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let router = seeded_router(&temp_dir, &three_products());

    let (status, body) = get_json(router, "/products?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_list_ignores_non_positive_or_invalid_limit() {
    let temp_dir = TempDir::new().unwrap();

    for uri in ["/products?limit=0", "/products?limit=-2", "/products?limit=abc", "/products?limit="] {
        let router = seeded_router(&temp_dir, &three_products());
        let (status, body) = get_json(router, uri).await;
        assert_eq!(status, StatusCode::OK, "uri: {}", uri);
        assert_eq!(body.as_array().unwrap().len(), 3, "uri: {}", uri);
    }
}

#[tokio::test]
async fn test_list_repeated_limit_uses_first() {
    let temp_dir = TempDir::new().unwrap();
    let router = seeded_router(&temp_dir, &three_products());

    let (status, body) = get_json(router, "/products?limit=1&limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 1, "title": "A", "price": 10}]));
}

#[tokio::test]
async fn test_list_ignores_unknown_params() {
    let temp_dir = TempDir::new().unwrap();
    let router = seeded_router(&temp_dir, &three_products());

    let (status, body) = get_json(router, "/products?sort=desc&limit=2&flag").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_limit_larger_than_collection() {
    let temp_dir = TempDir::new().unwrap();
    let router = seeded_router(&temp_dir, &three_products());

    let (_, body) = get_json(router, "/products?limit=50").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_absent_file_is_empty_array() {
    let temp_dir = TempDir::new().unwrap();
    let router = HttpServer::new(ProductStore::new(temp_dir.path().join("none.json"))).router();

    let (status, body) = get_json(router, "/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_corrupt_file_is_500() {
    let temp_dir = TempDir::new().unwrap();
    let router = seeded_router(&temp_dir, "{broken");

    let (status, body) = get_json(router, "/products").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch products"}));
}

// =============================================================================
// GET /products/:pid
// =============================================================================

#[tokio::test]
async fn test_get_existing_product() {
    let temp_dir = TempDir::new().unwrap();
    let router = seeded_router(&temp_dir, &three_products());

    let (status, body) = get_json(router, "/products/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 2, "title": "B", "price": 20}));
}

#[tokio::test]
async fn test_get_missing_product_is_404() {
    let temp_dir = TempDir::new().unwrap();
    let router = seeded_router(&temp_dir, &three_products());

    let (status, body) = get_json(router, "/products/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product not found"}));
}

#[tokio::test]
async fn test_get_non_numeric_id_is_404() {
    let temp_dir = TempDir::new().unwrap();

    for uri in ["/products/abc", "/products/-1"] {
        let router = seeded_router(&temp_dir, &three_products());
        let (status, _) = get_json(router, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri: {}", uri);
    }
}

#[tokio::test]
async fn test_get_leading_digits_id() {
    let temp_dir = TempDir::new().unwrap();
    let router = seeded_router(&temp_dir, &three_products());

    let (status, body) = get_json(router, "/products/3abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
}

#[tokio::test]
async fn test_get_corrupt_file_is_500() {
    let temp_dir = TempDir::new().unwrap();
    let router = seeded_router(&temp_dir, "[1, 2");

    let (status, body) = get_json(router, "/products/1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch product"}));
}

// =============================================================================
// Read-Only Surface
// =============================================================================

#[tokio::test]
async fn test_reads_never_write() {
    let temp_dir = TempDir::new().unwrap();
    let contents = r#"[{"id":1,"title":"A"}]"#;
    let router = seeded_router(&temp_dir, contents);

    let (status, _) = get_json(router.clone(), "/products").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get_json(router, "/products/1").await;
    assert_eq!(status, StatusCode::OK);

    let path = temp_dir.path().join("products.json");
    assert_eq!(fs::read_to_string(path).unwrap(), contents);
}

#[tokio::test]
async fn test_no_write_routes() {
    let temp_dir = TempDir::new().unwrap();
    let router = seeded_router(&temp_dir, &three_products());

    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"title":"D"}"#))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
