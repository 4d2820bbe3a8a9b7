//! Transport-agnostic mail sender.

use medora_core::contact::OutgoingEmail;

use crate::config::{MailConfig, TransportConfig};
use crate::error::MailError;
use crate::resend::ResendClient;
use crate::smtp::SmtpSender;

/// Outcome of a successful [`Mailer::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Handed to a transport; Resend reports a message id, SMTP does not.
    Sent { id: Option<String> },
    /// No transport configured; the message was written to the log.
    Logged,
}

enum Transport {
    Resend(ResendClient),
    Smtp(SmtpSender),
    LogOnly,
}

/// Sends contact form emails through the configured transport.
pub struct Mailer {
    transport: Transport,
}

impl Mailer {
    /// Build the transport selected by `config`.
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let transport = match &config.transport {
            TransportConfig::Resend {
                api_key,
                api_url,
                from_address,
            } => Transport::Resend(ResendClient::new(api_url, api_key, from_address)?),
            TransportConfig::Smtp {
                host,
                port,
                from_address,
                user,
                password,
            } => Transport::Smtp(SmtpSender::new(
                host,
                *port,
                from_address,
                user.as_deref(),
                password.as_deref(),
            )?),
            TransportConfig::LogOnly => Transport::LogOnly,
        };
        Ok(Self { transport })
    }

    /// A mailer that only logs. Used when nothing is configured and in tests.
    pub fn log_only() -> Self {
        Self {
            transport: Transport::LogOnly,
        }
    }

    /// Deliver `email`.
    pub async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, MailError> {
        match &self.transport {
            Transport::Resend(client) => {
                let id = client.send(email).await?;
                tracing::info!(to = %email.to, message_id = %id, "Email sent via Resend");
                Ok(Delivery::Sent { id: Some(id) })
            }
            Transport::Smtp(sender) => {
                sender.send(email).await?;
                tracing::info!(to = %email.to, "Email sent via SMTP");
                Ok(Delivery::Sent { id: None })
            }
            Transport::LogOnly => {
                tracing::warn!("No mail transport configured, email will be logged only");
                log_email(email);
                Ok(Delivery::Logged)
            }
        }
    }
}

/// Write the full message to the log so it can be sent by hand.
pub fn log_email(email: &OutgoingEmail) {
    tracing::info!(
        to = %email.to,
        reply_to = %email.reply_to,
        subject = %email.subject,
        body = %email.body,
        "Contact form email"
    );
}
