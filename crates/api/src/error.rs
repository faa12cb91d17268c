//! Unified error handling.
//!
//! Provides a unified `AppError` type that maps the error taxonomy to HTTP
//! statuses and response envelopes. All route handlers return
//! `Result<T, AppError>`. Deliberate errors carry specific messages;
//! unexpected store failures are logged and surfaced as a generic failure.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::routes::ApiResponse;
use crate::services::{CatalogError, CredentialError, ImagePipelineError};

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed required input.
    #[error("{0}")]
    Validation(String),

    /// Credential mismatch at signin.
    #[error("{0}")]
    Unauthorized(String),

    /// Referenced record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate username at signup.
    #[error("{0}")]
    Conflict(String),

    /// Upload exceeds the size limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Upload could not be decoded as an image.
    #[error("{0}")]
    InvalidImage(String),

    /// Underlying persistence unavailable.
    #[error("store error: {0}")]
    Store(#[from] RepositoryError),
}

impl AppError {
    /// A `NotFound` for a missing food record.
    #[must_use]
    pub fn food_not_found() -> Self {
        Self::NotFound("Food item not found".to_owned())
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InvalidImage(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Store errors are logged with detail but answered generically.
        let message = if let Self::Store(_) = &self {
            tracing::error!(error = %self, "request failed on the store");
            "Error processing request".to_owned()
        } else {
            self.to_string()
        };

        (self.status(), Json(ApiResponse::<()>::failure(message))).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(msg) => Self::Validation(msg),
            CatalogError::NotFound => Self::food_not_found(),
            CatalogError::Repository(e) => Self::Store(e),
        }
    }
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Validation(msg) => Self::Validation(msg),
            CredentialError::Conflict => Self::Conflict("Username already taken".to_owned()),
            CredentialError::Unauthorized => Self::Unauthorized("Invalid credentials".to_owned()),
            CredentialError::PasswordHash => Self::Store(RepositoryError::DataCorruption(
                "stored password hash is invalid".to_owned(),
            )),
            CredentialError::Repository(e) => Self::Store(e),
        }
    }
}

impl From<ImagePipelineError> for AppError {
    fn from(err: ImagePipelineError) -> Self {
        match err {
            ImagePipelineError::PayloadTooLarge { .. } => Self::PayloadTooLarge(err.to_string()),
            ImagePipelineError::InvalidImage(_) => Self::InvalidImage(err.to_string()),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        Self::Validation(err.to_string())
    }
}
