use std::sync::Arc;

use medora_mail::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: medora_db::DbPool,
    /// Server configuration (site URL, admin session settings, contact recipient).
    pub config: Arc<ServerConfig>,
    /// Outbound mail transport for the contact form.
    pub mailer: Arc<Mailer>,
}
