/// Error type for mail delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The HTTP request to the mail API failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The mail API answered with a non-2xx status.
    #[error("Mail API returned HTTP {status}: {body}")]
    ApiStatus { status: u16, body: String },

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// A recipient, sender or reply-to address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}
