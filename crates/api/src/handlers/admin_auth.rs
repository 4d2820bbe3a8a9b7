//! Handlers for admin login and logout (`/admin/auth`).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use axum::Json;
use medora_core::error::CoreError;
use serde::Deserialize;

use crate::auth::session::{
    clear_session_cookie, issue_session_token, password_matches, session_cookie,
};
use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

/// POST /api/admin/auth
///
/// Checks the shared admin password and sets the session cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let admin = &state.config.admin;

    let expected = admin
        .password
        .as_deref()
        .ok_or_else(|| AppError::NotConfigured("Admin password not configured".into()))?;

    if !password_matches(&input.password, expected) {
        tracing::warn!("Rejected admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let token = issue_session_token(admin)
        .map_err(|e| AppError::InternalError(format!("Failed to sign session token: {e}")))?;

    tracing::info!("Admin logged in");
    Ok((
        [(SET_COOKIE, session_cookie(&token, admin))],
        Json(SuccessResponse::ok()),
    ))
}

/// DELETE /api/admin/auth
///
/// Clears the session cookie. Succeeds whether or not a session existed.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(SET_COOKIE, clear_session_cookie(&state.config.admin))],
        Json(SuccessResponse::ok()),
    )
}
