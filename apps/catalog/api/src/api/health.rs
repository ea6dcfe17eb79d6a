//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde_json::Value;
use std::path::Path;

use crate::state::AppState;

/// Create a readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

async fn check_data_dir(path: &Path) -> Result<(), String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    if metadata.is_dir() {
        Ok(())
    } else {
        Err(format!("{} is not a directory", path.display()))
    }
}

/// Readiness check - the data directory exists and both documents parse
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![
        (
            "storage",
            Box::pin(check_data_dir(&state.config.storage.data_dir)),
        ),
        (
            "products",
            Box::pin(async {
                state
                    .products
                    .read(|products| products.len())
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            }),
        ),
        (
            "carts",
            Box::pin(async {
                state
                    .carts
                    .read(|carts| carts.len())
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            }),
        ),
    ];

    match run_health_checks(checks).await {
        Ok(ready) => ready,
        Err(not_ready) => not_ready,
    }
}
