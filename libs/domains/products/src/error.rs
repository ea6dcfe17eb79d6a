use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use json_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid product id: '{0}'")]
    InvalidId(String),

    #[error("Product not found: {0}")]
    NotFound(u64),

    #[error("No products found")]
    EmptyCollection,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Product with code '{0}' already exists")]
    DuplicateCode(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidId(raw) => AppError::InvalidId(raw),
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::EmptyCollection => {
                AppError::EmptyCollection("No products found".to_string())
            }
            ProductError::MissingFields(fields) => AppError::MissingFields(fields),
            ProductError::DuplicateCode(code) => {
                AppError::Conflict(format!("Product with code '{}' already exists", code))
            }
            ProductError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
