//! Handler tests for Products domain
//!
//! These tests drive the products router directly over an in-memory
//! document, checking status codes, response bodies and what ends up stored.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use json_store::{JsonStore, MemoryBackend};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

const DOCUMENT: &str = "products.json";

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn test_app() -> (Arc<MemoryBackend>, Router) {
    let backend = Arc::new(MemoryBackend::new());
    let store = JsonStore::from_shared(backend.clone(), DOCUMENT);
    let service = ProductService::new(JsonProductRepository::new(store));
    (backend, handlers::router(service))
}

fn product_body(code: &str) -> Value {
    json!({
        "title": format!("Product {}", code),
        "description": "Handler test",
        "code": code,
        "price": 12.5,
        "stock": 4,
        "category": "tests"
    })
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, code: &str) -> Product {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", &product_body(code)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let (backend, app) = test_app();

    let product = create(&app, "A").await;

    assert_eq!(product.id, 1);
    assert_eq!(product.code, "A");
    assert!(product.status);
    assert!(product.thumbnails.is_empty());

    let stored: Vec<Product> = serde_json::from_slice(&backend.document(DOCUMENT).unwrap()).unwrap();
    assert_eq!(stored, vec![product]);
}

#[tokio::test]
async fn test_create_assigns_ids_in_sequence() {
    let (_, app) = test_app();

    for (expected, code) in [(1, "A"), (2, "B"), (3, "C")] {
        assert_eq!(create(&app, code).await.id, expected);
    }
}

#[tokio::test]
async fn test_create_duplicate_code_returns_409() {
    let (backend, app) = test_app();
    create(&app, "A").await;
    let before = backend.document(DOCUMENT);

    let response = app
        .oneshot(json_request("POST", "/", &product_body("A")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "CONFLICT");
    assert_eq!(backend.document(DOCUMENT), before);
}

#[tokio::test]
async fn test_create_missing_fields_returns_400() {
    let (backend, app) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            &json!({ "title": "Only a title", "price": 0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "MISSING_FIELDS");
    assert_eq!(
        body["details"]["fields"],
        json!(["description", "code", "price", "stock", "category"])
    );
    assert_eq!(backend.document(DOCUMENT), None);
}

#[tokio::test]
async fn test_create_malformed_json_returns_400() {
    let (_, app) = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_list_empty_collection_returns_404() {
    let (_, app) = test_app();

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "EMPTY_COLLECTION");
}

#[tokio::test]
async fn test_list_with_limit() {
    let (_, app) = test_app();
    for code in ["A", "B", "C"] {
        create(&app, code).await;
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/?limit=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

    for uri in ["/", "/?limit=abc", "/?limit=0", "/?limit=-3"] {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
        let products: Vec<Product> = json_body(response.into_body()).await;
        assert_eq!(products.len(), 3, "uri {}", uri);
    }
}

#[tokio::test]
async fn test_get_product_handler() {
    let (_, app) = test_app();
    let created = create(&app, "A").await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product, created);

    let response = app.oneshot(empty_request("GET", "/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_product_invalid_id_returns_400() {
    let (_, app) = test_app();

    let response = app.oneshot(empty_request("GET", "/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
    assert_eq!(body["details"]["id"], "abc");
}

#[tokio::test]
async fn test_update_product_handler() {
    let (_, app) = test_app();
    create(&app, "A").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/1",
            &json!({ "id": 50, "price": 99.0, "title": null }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 1);
    assert_eq!(product.price, 99.0);
    assert_eq!(product.title, "Product A");
}

#[tokio::test]
async fn test_update_with_empty_body_keeps_document() {
    let (backend, app) = test_app();
    let created = create(&app, "A").await;
    let before = backend.document(DOCUMENT);

    let response = app
        .oneshot(json_request("PUT", "/1", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product, created);
    assert_eq!(backend.document(DOCUMENT), before);
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let (_, app) = test_app();

    let response = app
        .oneshot(json_request("PUT", "/5", &json!({ "stock": 1 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_returns_404() {
    let (_, app) = test_app();
    create(&app, "A").await;

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let removed: Product = json_body(response.into_body()).await;
    assert_eq!(removed.code, "A");

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_storage_failure_returns_500_without_path() {
    let (backend, app) = test_app();
    backend.set_simulate_write_error(true);

    let response = app
        .oneshot(json_request("POST", "/", &product_body("A")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "STORAGE_IO");
    assert!(!body.to_string().contains(DOCUMENT));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let (backend, app) = test_app();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                app.oneshot(json_request("POST", "/", &product_body(&format!("C{}", i))))
                    .await
                    .unwrap()
                    .status()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }

    let stored: Vec<Product> = serde_json::from_slice(&backend.document(DOCUMENT).unwrap()).unwrap();
    let mut ids: Vec<u64> = stored.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=50).collect::<Vec<_>>());
}
