//! Contact form submission validation and outgoing message formatting.

use serde::Deserialize;
use validator::ValidateEmail;

use crate::error::CoreError;

/// Default recipient for contact form messages.
pub const DEFAULT_CONTACT_RECIPIENT: &str = "anna.solovyova@medora.agency";

/// Raw contact form body. Every field is optional at the wire level so a
/// missing field produces the form's own error message instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    /// The "where does adoption break?" free-text answer.
    #[serde(rename = "adoption-breaks")]
    pub message: Option<String>,
}

/// A plain-text email ready to hand to a mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

/// A submission whose fields are all present.
#[derive(Debug, Clone)]
struct ContactFields<'a> {
    name: &'a str,
    company: &'a str,
    role: &'a str,
    email: &'a str,
    message: &'a str,
}

fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ContactSubmission {
    fn fields(&self) -> Result<ContactFields<'_>, CoreError> {
        let all_required = || CoreError::Validation("All fields are required".to_string());
        let fields = ContactFields {
            name: required(&self.name).ok_or_else(all_required)?,
            company: required(&self.company).ok_or_else(all_required)?,
            role: required(&self.role).ok_or_else(all_required)?,
            email: required(&self.email).ok_or_else(all_required)?,
            message: required(&self.message).ok_or_else(all_required)?,
        };
        if !fields.email.validate_email() {
            return Err(CoreError::Validation("Invalid email address".to_string()));
        }
        Ok(fields)
    }

    /// Validate the submission and format the notification email for `recipient`.
    pub fn into_email(&self, recipient: &str) -> Result<OutgoingEmail, CoreError> {
        let f = self.fields()?;

        let subject = format!("Contact Form Submission from {} at {}", f.name, f.company);
        let body = format!(
            "New contact form submission:\n\
             \n\
             Name: {}\n\
             Company: {}\n\
             Role: {}\n\
             Email: {}\n\
             \n\
             Message:\n\
             {}\n\
             \n\
             ---\n\
             This message was sent from the Medora website contact form.",
            f.name, f.company, f.role, f.email, f.message
        );

        Ok(OutgoingEmail {
            to: recipient.to_string(),
            reply_to: f.email.to_string(),
            subject,
            body,
        })
    }
}
