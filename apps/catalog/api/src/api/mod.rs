//! API routes module

pub mod carts;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/carts", carts::router(state))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig, storage::StorageConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn state_in(dir: &std::path::Path) -> AppState {
        AppState::new(Config {
            app: app_info!(),
            server: ServerConfig::default(),
            storage: StorageConfig {
                data_dir: dir.to_path_buf(),
                ..StorageConfig::default()
            },
            environment: Environment::Development,
        })
    }

    fn app(state: &AppState) -> Router {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            axum_helpers::create_router::<crate::openapi::ApiDoc>(
                routes(state),
                &Environment::Development,
            )
            .unwrap()
        })
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_products_and_carts_share_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path());
        let app = app(&state);

        let (status, product) = send(
            &app,
            "POST",
            "/api/products",
            Some(json!({
                "title": "Pen",
                "description": "Blue ink",
                "code": "PEN-1",
                "price": 1.5,
                "stock": 100,
                "category": "office"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, cart) = send(&app, "POST", "/api/carts", None).await;
        assert_eq!(status, StatusCode::CREATED);

        let uri = format!("/api/carts/{}/product/{}", cart["id"], product["id"]);
        let (status, item) = send(&app, "POST", &uri, None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(item, json!({ "id": 1, "quantity": 1 }));

        assert!(dir.path().join("products.json").is_file());
        assert!(dir.path().join("carts.json").is_file());
    }

    #[tokio::test]
    async fn test_ready_reports_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir.path().join("missing"));
        let app = app(&state);

        let (status, body) = send(&app, "GET", "/api/ready", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["storage"], "disconnected");
        assert_eq!(body["products"], "connected");
    }

    #[tokio::test]
    async fn test_ready_reports_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("carts.json"), "{ broken").unwrap();
        let state = state_in(dir.path());
        let app = app(&state);

        let (status, body) = send(&app, "GET", "/api/ready", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["storage"], "connected");
        assert_eq!(body["carts"], "disconnected");
    }

    #[tokio::test]
    async fn test_openapi_lists_domain_paths() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&state_in(dir.path()));

        let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"].get("/api/products/{id}").is_some());
        assert!(
            doc["paths"]
                .get("/api/carts/{cart_id}/product/{product_id}")
                .is_some()
        );
    }
}
