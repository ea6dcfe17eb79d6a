pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use json_store::StoreError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// This structure is returned for all error responses, providing consistent
/// error information to clients including
/// - `code`: Integer error code for logging/monitoring (e.g., 1008)
/// - `error`: Machine-readable error identifier (e.g., "CONFLICT")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., missing field names)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1008,
///   "error": "CONFLICT",
///   "message": "Product with code 'abc' already exists"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type, which picks the status code,
/// logs at the right level and renders an [`ErrorResponse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    /// HTTP status code this error renders with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::InvalidId(_) | AppError::MissingFields(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::EmptyCollection(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, details, code) = match self {
            AppError::Storage(e) => map_store_error(&e),
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (e.body_text(), None, ErrorCode::JsonExtraction)
            }
            AppError::InvalidId(raw) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidId.code(),
                    "Invalid id: {}",
                    raw
                );
                (
                    ErrorCode::InvalidId.default_message().to_string(),
                    Some(serde_json::json!({ "id": raw })),
                    ErrorCode::InvalidId,
                )
            }
            AppError::MissingFields(fields) => {
                tracing::info!(
                    error_code = ErrorCode::MissingFields.code(),
                    "Missing fields: {:?}",
                    fields
                );
                (
                    ErrorCode::MissingFields.default_message().to_string(),
                    Some(serde_json::json!({ "fields": fields })),
                    ErrorCode::MissingFields,
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (msg, None, ErrorCode::NotFound)
            }
            AppError::EmptyCollection(msg) => {
                tracing::info!(
                    error_code = ErrorCode::EmptyCollection.code(),
                    "Empty collection: {}",
                    msg
                );
                (msg, None, ErrorCode::EmptyCollection)
            }
            AppError::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                (msg, None, ErrorCode::Conflict)
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Maps a storage failure to response components.
///
/// The document location is logged but never sent to the client.
fn map_store_error(error: &StoreError) -> (String, Option<serde_json::Value>, ErrorCode) {
    let code = match error {
        StoreError::Io { .. } => ErrorCode::StorageIo,
        StoreError::Serialization { .. } => ErrorCode::StorageCorrupt,
        StoreError::IdSpaceExhausted { .. } => ErrorCode::InternalError,
    };

    tracing::error!(
        error_code = code.code(),
        document = error.document(),
        transient = error.is_transient(),
        "Storage error: {}",
        error
    );

    (code.default_message().to_string(), None, code)
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::BAD_REQUEST,
///     "Invalid input".to_string(),
///     ErrorCode::BadRequest,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}
