use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use json_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Invalid id: '{0}'")]
    InvalidId(String),

    #[error("Cart not found: {0}")]
    NotFound(u64),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

pub type CartResult<T> = Result<T, CartError>;

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::InvalidId(raw) => AppError::InvalidId(raw),
            CartError::NotFound(id) => AppError::NotFound(format!("Cart {} not found", id)),
            CartError::MissingFields(fields) => AppError::MissingFields(fields),
            CartError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
