//! Contact form state and validation.
//!
//! Submissions are validated locally and logged; nothing is sent over the
//! network.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use crate::error::ContactFormError;

/// Email syntax accepted by `<input type="email">`.
#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+",
        r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    ))
    .expect("email pattern is valid")
});

/// Whether `email` is syntactically valid.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    /// Sender name (required).
    Name,
    /// Reply address (required).
    Email,
    /// Subject line.
    Subject,
    /// Message body (required).
    Message,
}

impl ContactField {
    /// All fields in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Placeholder shown in the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Navn",
            Self::Email => "Email",
            Self::Subject => "Emne",
            Self::Message => "Besked",
        }
    }

    /// Whether the form refuses to submit without this field.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Subject)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated contact request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Subject line, if given.
    pub subject: Option<String>,
    /// Message body.
    pub message: String,
}

/// Editable contact form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Current value of `field`.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Check the form without changing it.
    ///
    /// Fields are checked in form order; the first problem is reported.
    ///
    /// # Errors
    ///
    /// Returns [`ContactFormError`] for a missing required field or a
    /// malformed email address.
    pub fn validate(&self) -> Result<ContactSubmission, ContactFormError> {
        for field in ContactField::ALL {
            if field.is_required() && self.get(field).trim().is_empty() {
                return Err(ContactFormError::MissingField(field));
            }
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(ContactFormError::InvalidEmail(email.to_string()));
        }

        let subject = self.subject.trim();
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: self.message.trim().to_string(),
        })
    }

    /// Validate, log the payload and clear the form.
    ///
    /// On error the form keeps its contents so the visitor can fix them.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`ContactForm::validate`].
    pub fn submit(&mut self) -> Result<ContactSubmission, ContactFormError> {
        let submission = self.validate()?;
        info!(
            name = %submission.name,
            email = %submission.email,
            subject = submission.subject.as_deref().unwrap_or(""),
            message_len = submission.message.len(),
            "Contact form submitted"
        );
        *self = Self::default();
        Ok(submission)
    }
}
