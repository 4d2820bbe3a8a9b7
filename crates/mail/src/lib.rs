//! Outbound mail for the contact form.
//!
//! [`Mailer`] hands an [`OutgoingEmail`](medora_core::contact::OutgoingEmail)
//! to one of three transports chosen at start-up by [`MailConfig::from_env`]:
//!
//! - [`resend`]: the Resend HTTP API, when `RESEND_API_KEY` is set
//! - [`smtp`]: an SMTP relay via `lettre`, when `SMTP_HOST` is set
//! - log-only, when neither is configured (local development)

pub mod config;
pub mod error;
pub mod mailer;
pub mod resend;
pub mod smtp;

pub use config::{MailConfig, TransportConfig};
pub use error::MailError;
pub use mailer::{log_email, Delivery, Mailer};
