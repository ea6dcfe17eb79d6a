//! Type-safe error codes for API responses.
//!
//! This module provides a single source of truth for error codes used across
//! the application. Each error code includes:
//! - String representation for client consumption (e.g., "INVALID_ID")
//! - Integer code for logging and monitoring (e.g., 1002)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::MissingFields;
//! assert_eq!(code.as_str(), "MISSING_FIELDS");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Required fields are missing");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Required input fields are absent or empty
    MissingFields,

    /// Id path parameter is not a non-negative integer
    InvalidId,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    /// Request conflicts with current resource state (e.g., duplicate code)
    Conflict,

    /// Generic malformed request
    BadRequest,

    /// Collection has no records to list
    EmptyCollection,

    // Storage errors (2000-2999)
    /// Collection document could not be read or written
    StorageIo,

    /// Collection document content is not a valid collection
    StorageCorrupt,
}

impl ErrorCode {
    /// Get the string representation for client consumption.
    ///
    /// # Example
    ///
    /// ```rust
    /// use axum_helpers::errors::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::InvalidId.as_str(), "INVALID_ID");
    /// assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::Conflict => "CONFLICT",
            Self::BadRequest => "BAD_REQUEST",
            Self::EmptyCollection => "EMPTY_COLLECTION",
            Self::StorageIo => "STORAGE_IO",
            Self::StorageCorrupt => "STORAGE_CORRUPT",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// Ranges:
    /// - 1000-1999: Client errors
    /// - 2000-2999: Storage errors
    pub fn code(&self) -> i32 {
        match self {
            // Client errors (1000-1999)
            Self::MissingFields => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Conflict => 1008,
            Self::BadRequest => 1009,
            Self::EmptyCollection => 1010,

            // Storage errors (2000-2999)
            Self::StorageIo => 2001,
            Self::StorageCorrupt => 2002,
        }
    }

    /// Get the default user-facing error message.
    ///
    /// Individual handlers can override these messages with more specific details.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::MissingFields => "Required fields are missing",
            Self::InvalidId => "Id must be a valid non-negative integer",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::Conflict => "Resource already exists",
            Self::BadRequest => "Bad request",
            Self::EmptyCollection => "No records available",
            Self::StorageIo => "Storage is temporarily unavailable",
            Self::StorageCorrupt => "Stored data could not be read",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
