//! Mail transport selection from environment variables.

/// Default Resend API endpoint.
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Sender used by Resend when `RESEND_FROM_EMAIL` is not set. Resend accepts
/// it without a verified domain.
pub const DEFAULT_RESEND_FROM: &str = "onboarding@resend.dev";

/// Default SMTP port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default SMTP sender when `SMTP_FROM` is not set.
pub const DEFAULT_SMTP_FROM: &str = "noreply@medora.agency";

/// Which transport delivers outgoing mail, with its settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportConfig {
    Resend {
        api_key: String,
        api_url: String,
        from_address: String,
    },
    Smtp {
        host: String,
        port: u16,
        from_address: String,
        user: Option<String>,
        password: Option<String>,
    },
    /// Nothing configured: messages are written to the log only.
    LogOnly,
}

/// Mail configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub transport: TransportConfig,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable             | Default                   |
    /// |----------------------|---------------------------|
    /// | `RESEND_API_KEY`     | (selects Resend when set) |
    /// | `RESEND_API_URL`     | `https://api.resend.com`  |
    /// | `RESEND_FROM_EMAIL`  | `onboarding@resend.dev`   |
    /// | `SMTP_HOST`          | (selects SMTP when set)   |
    /// | `SMTP_PORT`          | `587`                     |
    /// | `SMTP_FROM`          | `noreply@medora.agency`   |
    /// | `SMTP_USER`          | --                        |
    /// | `SMTP_PASSWORD`      | --                        |
    ///
    /// Resend takes precedence when both are configured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let transport = if let Some(api_key) = non_empty("RESEND_API_KEY") {
            TransportConfig::Resend {
                api_key,
                api_url: non_empty("RESEND_API_URL")
                    .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
                from_address: non_empty("RESEND_FROM_EMAIL")
                    .unwrap_or_else(|| DEFAULT_RESEND_FROM.to_string()),
            }
        } else if let Some(host) = non_empty("SMTP_HOST") {
            TransportConfig::Smtp {
                host,
                port: non_empty("SMTP_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_SMTP_PORT),
                from_address: non_empty("SMTP_FROM")
                    .unwrap_or_else(|| DEFAULT_SMTP_FROM.to_string()),
                user: non_empty("SMTP_USER"),
                password: non_empty("SMTP_PASSWORD"),
            }
        } else {
            TransportConfig::LogOnly
        };

        Self { transport }
    }

    /// Short transport name for start-up logging.
    pub fn transport_name(&self) -> &'static str {
        match self.transport {
            TransportConfig::Resend { .. } => "resend",
            TransportConfig::Smtp { .. } => "smtp",
            TransportConfig::LogOnly => "log-only",
        }
    }
}
