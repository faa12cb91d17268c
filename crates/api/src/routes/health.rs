//! Health check route.

use axum::Json;
use serde::Serialize;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// GET / - report that the API is up.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Backend is running",
        status: "ok",
    })
}
