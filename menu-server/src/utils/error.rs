//! Unified error handling
//!
//! Application-level error type for HTTP handlers. Two shapes go over the
//! wire, matching what clients of this API expect:
//!
//! ```json
//! { "message": "Menu item not found" }
//! { "errors": ["name must be at least 3 characters", "..."] }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Business Logic Errors ==========
    /// Resource does not exist (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// One or more field rules failed (400, full list reported)
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Malformed request outside the field rules (400)
    #[error("Invalid request: {0}")]
    Invalid(String),

    // ========== System Errors ==========
    /// Unexpected failure (500, detail logged but not exposed)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Single-message error body (404 and malformed requests)
#[derive(Debug, Serialize)]
struct ErrorMessage {
    message: String,
}

/// Field-rule error body (validation failures)
#[derive(Debug, Serialize)]
struct ErrorList {
    errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorMessage { message })).into_response()
            }

            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorList { errors })).into_response()
            }

            AppError::Invalid(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorMessage { message })).into_response()
            }

            AppError::Internal(detail) => {
                error!(target: "internal", error = %detail, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorMessage {
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation(errors)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
