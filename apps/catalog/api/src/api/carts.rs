//! Carts API routes

use axum::Router;
use domain_carts::{CartService, JsonCartRepository, handlers};

use crate::state::AppState;

/// Create carts router
pub fn router(state: &AppState) -> Router {
    let repository = JsonCartRepository::new(state.carts.clone());
    let service = CartService::new(repository);

    handlers::router(service)
}
