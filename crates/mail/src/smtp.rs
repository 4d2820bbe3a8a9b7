//! Delivery through an SMTP relay via `lettre`.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use medora_core::contact::OutgoingEmail;

use crate::error::MailError;

/// Pooled STARTTLS SMTP sender.
pub struct SmtpSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpSender {
    /// Build the transport. No connection is opened until the first send.
    pub fn new(
        host: &str,
        port: u16,
        from_address: &str,
        user: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?.port(port);

        if let (Some(user), Some(pass)) = (user, password) {
            builder = builder.credentials(Credentials::new(user.to_string(), pass.to_string()));
        }

        Ok(Self {
            transport: builder.build(),
            from_address: from_address.to_string(),
        })
    }

    /// Send `email` as a plain-text message.
    pub async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let message = build_message(&self.from_address, email)?;
        self.transport.send(message).await?;
        Ok(())
    }
}

/// Assemble the MIME message for `email`.
fn build_message(from_address: &str, email: &OutgoingEmail) -> Result<Message, MailError> {
    Message::builder()
        .from(from_address.parse()?)
        .to(email.to.parse()?)
        .reply_to(email.reply_to.parse()?)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}
