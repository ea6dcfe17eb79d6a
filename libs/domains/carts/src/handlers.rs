//! HTTP handlers for Carts API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::errors::responses::{
    BadRequestIdResponse, BadRequestMissingFieldsResponse, InternalServerErrorResponse,
    NotFoundResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CartResult;
use crate::models::{Cart, CartItem};
use crate::repository::CartRepository;
use crate::service::CartService;

/// OpenAPI documentation for Carts API
#[derive(OpenApi)]
#[openapi(
    paths(create_cart, get_cart, add_product),
    components(
        schemas(Cart, CartItem),
        responses(
            NotFoundResponse,
            BadRequestIdResponse,
            BadRequestMissingFieldsResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Carts", description = "Shopping cart endpoints")
    )
)]
pub struct ApiDoc;

/// Create the carts router with all HTTP endpoints
pub fn router<R: CartRepository + 'static>(service: CartService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_cart))
        .route("/{id}", get(get_cart))
        .route("/{cart_id}/product/{product_id}", post(add_product))
        .with_state(shared_service)
}

/// Create an empty cart
#[utoipa::path(
    post,
    path = "",
    tag = "Carts",
    responses(
        (status = 201, description = "Cart created", body = Cart),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_cart<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
) -> CartResult<impl IntoResponse> {
    let cart = service.create().await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

/// Get a cart by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Carts",
    params(
        ("id" = u64, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Cart found", body = Cart),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_cart<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    Path(id): Path<String>,
) -> CartResult<Json<Cart>> {
    let cart = service.get(&id).await?;
    Ok(Json(cart))
}

/// Add one unit of a product to a cart
#[utoipa::path(
    post,
    path = "/{cart_id}/product/{product_id}",
    tag = "Carts",
    params(
        ("cart_id" = u64, Path, description = "Cart ID"),
        ("product_id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 201, description = "Item added or its quantity incremented", body = CartItem),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_product<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    Path((cart_id, product_id)): Path<(String, String)>,
) -> CartResult<impl IntoResponse> {
    let item = service.add_product(&cart_id, &product_id).await?;
    Ok((StatusCode::CREATED, Json(item)))
}
