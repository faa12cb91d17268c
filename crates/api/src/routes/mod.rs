//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /            - Health check
//!
//! # Credentials
//! POST   /signup      - Create a user
//! POST   /signin      - Verify credentials
//! POST   /logout      - Stateless acknowledgment
//!
//! # Catalog
//! GET    /food        - List foods (most recent first)
//! GET    /food/{id}   - Single food
//! POST   /food        - Add a food (multipart: name, price, image, description?)
//! PUT    /food/{id}   - Full replace (same form as POST)
//! DELETE /food/{id}   - Remove a food
//! ```

pub mod auth;
pub mod foods;
pub mod health;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::image::MAX_UPLOAD_BYTES;
use crate::state::AppState;

/// Request body cap. Above the image limit so an oversized upload reaches
/// the pipeline's own size gate and gets a specific error, not a generic
/// body-limit rejection.
const BODY_LIMIT_BYTES: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

/// The envelope every response uses: a success flag, an optional
/// human-readable message, and an optional data payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying only data.
    pub const fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// A successful response carrying a message and data.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// A successful response carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// A failed response carrying a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health))
        .route("/signup", post(auth::signup))
        .route("/signin", post(auth::signin))
        .route("/logout", post(auth::logout))
        .route("/food", get(foods::list).post(foods::create))
        .route(
            "/food/{id}",
            get(foods::get).put(foods::update).delete(foods::delete),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
