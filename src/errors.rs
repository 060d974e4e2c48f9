//! Centralized error handling.
//!
//! Provides a unified error type for failures that escape the use-case
//! pipeline, with automatic HTTP response conversion. Expected business
//! failures never become an `AppError`; use cases convert those into a
//! `UseCaseResult` before returning.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::types::ApplicationStatus;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejection from the authentication gate. Carries the localized
    /// authorization-required message, uniform across failure causes.
    #[error("{0}")]
    Unauthorized(String),

    /// Malformed request body or parameters.
    #[error("Invalid input: {0}")]
    BadRequest(String),

    /// An application status was produced on a route that never declared it.
    #[error("no transport mapping registered for {0}")]
    MappingNotFound(ApplicationStatus),

    /// Token signing/verification failure.
    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body, shaped like the use-case result envelope
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    #[serde(rename = "statusCode")]
    status_code: ApplicationStatus,
    message: String,
}

impl AppError {
    /// Get the application status this error maps to
    pub fn application_status(&self) -> ApplicationStatus {
        match self {
            AppError::Unauthorized(_) | AppError::Jwt(_) => ApplicationStatus::Unauthorized,
            AppError::BadRequest(_) => ApplicationStatus::InvalidInput,
            AppError::MappingNotFound(_) | AppError::Internal(_) => {
                ApplicationStatus::InternalError
            }
        }
    }

    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MappingNotFound(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),

            // Hide details for internal/security errors
            AppError::Jwt(e) => {
                tracing::error!("JWT error: {:?}", e);
                "Invalid or expired token".to_string()
            }
            AppError::MappingNotFound(status) => {
                tracing::error!("No transport mapping registered for {}", status);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorEnvelope {
            success: false,
            status_code: self.application_status(),
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
