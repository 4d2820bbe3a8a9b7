//! Admin session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use medora_core::error::CoreError;

use crate::auth::session::{cookie_value, validate_session_token, ADMIN_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carries a valid admin session cookie.
///
/// Add it as a handler parameter to gate the handler:
///
/// ```ignore
/// async fn my_handler(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin {
    /// Session token id, for log correlation.
    pub session_id: String,
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let unauthorized = || AppError::Core(CoreError::Unauthorized("Unauthorized".into()));

        let token = cookie_value(&parts.headers, ADMIN_COOKIE)
            .filter(|t| !t.is_empty())
            .ok_or_else(unauthorized)?;

        let claims = validate_session_token(token, &state.config.admin).map_err(|e| {
            tracing::debug!(error = %e, "Rejected admin session cookie");
            unauthorized()
        })?;

        Ok(RequireAdmin {
            session_id: claims.jti,
        })
    }
}
