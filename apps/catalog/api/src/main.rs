use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    tokio::fs::create_dir_all(&config.storage.data_dir)
        .await
        .wrap_err_with(|| {
            format!(
                "Failed to create data directory {}",
                config.storage.data_dir.display()
            )
        })?;
    info!("Storing documents in {}", config.storage.data_dir.display());

    let state = AppState::new(config);

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router =
        axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.environment)?;

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    let shutdown_timeout = state.config.server.shutdown_timeout;
    info!(
        "Starting Catalog API with graceful shutdown ({:?} timeout)",
        shutdown_timeout
    );

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, shutdown_timeout, async move {
        // Taking each document lock waits for an in-flight write to finish
        info!("Shutting down: waiting for pending document writes");
        let products = state.products.read(|products| products.len()).await;
        let carts = state.carts.read(|carts| carts.len()).await;
        match (products, carts) {
            (Ok(products), Ok(carts)) => info!(products, carts, "Documents settled"),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("Document check failed during shutdown: {}", e)
            }
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
