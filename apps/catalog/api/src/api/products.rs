//! Products API routes

use axum::Router;
use domain_products::{JsonProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = JsonProductRepository::new(state.products.clone());
    let service = ProductService::new(repository);

    handlers::router(service)
}
