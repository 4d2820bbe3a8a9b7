//! Handler for the marketing site contact form.

use axum::extract::State;
use axum::Json;
use medora_core::contact::ContactSubmission;
use medora_mail::{log_email, Delivery};

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /api/contact
///
/// Validates the submission and forwards it by email. Delivery failures are
/// logged together with the full message and do not fail the request; the
/// visitor has done their part.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactSubmission>,
) -> AppResult<Json<SuccessResponse>> {
    let email = input.into_email(&state.config.contact_recipient)?;

    match state.mailer.send(&email).await {
        Ok(Delivery::Sent { id }) => {
            tracing::info!(message_id = ?id, "Contact form forwarded");
        }
        Ok(Delivery::Logged) => {}
        Err(e) => {
            tracing::error!(
                error = %e,
                "Contact form email failed, logging message for manual follow-up"
            );
            log_email(&email);
        }
    }

    Ok(Json(SuccessResponse::with_message(
        "Form submitted successfully",
    )))
}
