//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for request handling. Each variant
//! maps to a specific HTTP status code and a JSON error envelope. Store
//! failures are logged in full and reach the client only as a
//! generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BookId, InvalidBookId};
use crate::store::StoreError;

/// JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "error": "book not found" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Short human-readable message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant            | HTTP Status                  |
/// |--------------------|------------------------------|
/// | `InvalidRequest`   | 400 Bad Request              |
/// | `InvalidId`        | 400 Bad Request              |
/// | `Duplicate`        | 400 Bad Request              |
/// | `Unauthorized`     | 401 Unauthorized             |
/// | `BookNotFound`     | 404 Not Found                |
/// | `PayloadTooLarge`  | 413 Payload Too Large        |
/// | `Store`            | 500 Internal Server Error    |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed body or missing required field.
    #[error("{0}")]
    InvalidRequest(String),

    /// Path identifier is not a UUID literal.
    #[error("invalid book id: {0}")]
    InvalidId(String),

    /// Book with the given ID was not found.
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    /// Insert violated a uniqueness constraint.
    #[error("book already exists")]
    Duplicate,

    /// Missing or wrong `Authorization` header.
    #[error("unauthorized")]
    Unauthorized,

    /// Request body exceeded the configured ceiling.
    #[error("request body too large")]
    PayloadTooLarge,

    /// Record store failure.
    #[error("store error: {0}")]
    Store(String),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidId(_) | Self::Duplicate => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BookNotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients.
    fn public_message(&self) -> String {
        match self {
            Self::Store(_) => "an internal error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<InvalidBookId> for ApiError {
    fn from(err: InvalidBookId) -> Self {
        Self::InvalidId(err.literal)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::BookNotFound(id),
            StoreError::Duplicate => Self::Duplicate,
            StoreError::Backend(msg) => Self::Store(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: self.public_message(),
        };
        (status, axum::Json(body)).into_response()
    }
}
