use medora_core::contact::DEFAULT_CONTACT_RECIPIENT;

use crate::auth::session::AdminConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the admin session secret have sensible defaults
/// suitable for local development. In production, override via environment
/// variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Public base URL used for canonical links and OpenGraph images.
    pub site_url: String,
    /// Directory holding the static marketing pages.
    pub static_dir: String,
    /// Address contact form submissions are forwarded to.
    pub contact_recipient: String,
    /// Admin password and session cookie settings.
    pub admin: AdminConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `3000`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:3008`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `SITE_URL`             | `http://localhost:3008`          |
    /// | `STATIC_DIR`           | `public`                         |
    /// | `CONTACT_RECIPIENT`    | `anna.solovyova@medora.agency`   |
    ///
    /// Admin settings are documented on [`AdminConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3008".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:3008".into())
            .trim_end_matches('/')
            .to_string();

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".into());

        let contact_recipient = std::env::var("CONTACT_RECIPIENT")
            .unwrap_or_else(|_| DEFAULT_CONTACT_RECIPIENT.into());

        let admin = AdminConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            site_url,
            static_dir,
            contact_recipient,
            admin,
        }
    }
}
