//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; every failure becomes an HTTP status plus an
//! `{"error": message}` JSON body. Nothing here retries.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::cloudinary::CloudinaryError;
use crate::services::token::TokenError;

/// Application-level error type for the portfolio server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Token issuance or verification failed.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Media upload failed.
    #[error("Upload error: {0}")]
    Upload(#[from] CloudinaryError),

    /// Request lacked a valid admin credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A required upstream credential is not configured.
    #[error("Server misconfigured: {0}")]
    Misconfigured(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this is a server-side failure worth capturing to Sentry.
    fn is_server_error(&self) -> bool {
        match self {
            Self::Database(_) | Self::Internal(_) | Self::Misconfigured(_) => true,
            Self::Upload(err) => !matches!(err, CloudinaryError::Rejected { .. }),
            Self::Token(err) => matches!(
                err,
                TokenError::InvalidKey | TokenError::Serialize(_)
            ),
            Self::Unauthorized(_) | Self::BadRequest(_) => false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) | Self::Misconfigured(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Token(err) => match err {
                TokenError::InvalidKey | TokenError::Serialize(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                _ => StatusCode::UNAUTHORIZED,
            },
            Self::Upload(err) => match err {
                // Upstream rejection is the caller's problem (bad payload,
                // bad credentials on their asset); transport failures are a
                // gateway fault.
                CloudinaryError::Rejected { .. } => StatusCode::BAD_REQUEST,
                CloudinaryError::Http(_) | CloudinaryError::Parse(_) => StatusCode::BAD_GATEWAY,
            },
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Misconfigured(msg) => msg.clone(),
            Self::Token(err) => match err {
                TokenError::InvalidKey | TokenError::Serialize(_) => {
                    "Internal server error".to_string()
                }
                _ => "Unauthorized".to_string(),
            },
            Self::Upload(err) => match err {
                CloudinaryError::Rejected { message, .. } => message.clone(),
                CloudinaryError::Http(_) | CloudinaryError::Parse(_) => {
                    "External service error".to_string()
                }
            },
            Self::Unauthorized(msg) => msg.clone(),
            Self::BadRequest(msg) => msg.clone(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
