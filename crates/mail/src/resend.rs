//! Delivery through the Resend HTTP API (`POST /emails`).

use std::time::Duration;

use medora_core::contact::OutgoingEmail;
use serde::{Deserialize, Serialize};

use crate::error::MailError;

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Request body for `POST /emails`.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    reply_to: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Thin client for the Resend email API.
pub struct ResendClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_address: String,
}

impl ResendClient {
    /// Create a client with a pre-configured HTTP connection pool.
    pub fn new(api_url: &str, api_key: &str, from_address: &str) -> Result<Self, MailError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            from_address: from_address.to_string(),
        })
    }

    /// Send `email`, returning the message id Resend assigned.
    pub async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError> {
        let body = SendEmailRequest {
            from: &self.from_address,
            to: [&email.to],
            subject: &email.subject,
            text: &email.body,
            reply_to: &email.reply_to,
        };

        let response = self
            .client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let sent: SendEmailResponse = response.json().await?;
        Ok(sent.id)
    }
}
