//! Credential route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::UserView;
use crate::routes::ApiResponse;
use crate::services::CredentialService;
use crate::state::AppState;

/// Signup/signin request body.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /signup - create a user.
///
/// # Errors
///
/// 400 on empty input, 409 if the username is taken.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserView>>), AppError> {
    let user = CredentialService::new(state.pool())
        .signup(&req.username, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Sign up successful", user)),
    ))
}

/// POST /signin - verify credentials.
///
/// # Errors
///
/// 400 on empty input, 401 on any credential mismatch.
pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<ApiResponse<UserView>>, AppError> {
    let user = CredentialService::new(state.pool())
        .signin(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::with_message("Sign in successful", user)))
}

/// POST /logout - stateless acknowledgment; nothing to invalidate.
pub async fn logout() -> Json<ApiResponse<()>> {
    CredentialService::logout();
    Json(ApiResponse::message("Logout successful"))
}
