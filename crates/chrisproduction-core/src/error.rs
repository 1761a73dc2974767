//! Error types for ChrisProduction core operations.

use thiserror::Error;

use crate::contact::ContactField;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ChrisProduction core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The key-value store backing the theme preference is unavailable.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Reading a key from the store failed.
    #[error("Failed to read '{key}' from storage: {reason}")]
    StorageRead {
        /// Key being read.
        key: String,
        /// Underlying reason.
        reason: String,
    },

    /// Writing a key to the store failed.
    #[error("Failed to write '{key}' to storage: {reason}")]
    StorageWrite {
        /// Key being written.
        key: String,
        /// Underlying reason.
        reason: String,
    },

    /// The contact form did not pass validation.
    #[error("Invalid contact form: {0}")]
    ContactForm(#[from] ContactFormError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reasons a contact form submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    /// A required field was left empty.
    #[error("{0} is required")]
    MissingField(ContactField),

    /// The email field does not look like an email address.
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl ContactFormError {
    /// The field the error refers to.
    #[must_use]
    pub const fn field(&self) -> ContactField {
        match self {
            Self::MissingField(field) => *field,
            Self::InvalidEmail(_) => ContactField::Email,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_write_display() {
        let err = Error::StorageWrite {
            key: "theme".to_string(),
            reason: "quota exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write 'theme' to storage: quota exceeded"
        );
    }

    #[test]
    fn test_storage_unavailable_display() {
        let err = Error::StorageUnavailable("localStorage is disabled".to_string());
        assert_eq!(err.to_string(), "Storage unavailable: localStorage is disabled");
    }

    #[test]
    fn test_missing_field_display() {
        let err = ContactFormError::MissingField(ContactField::Message);
        assert_eq!(err.to_string(), "Besked is required");
        assert_eq!(err.field(), ContactField::Message);
    }

    #[test]
    fn test_contact_form_error_conversion() {
        let err: Error = ContactFormError::InvalidEmail("nope".to_string()).into();
        assert!(matches!(err, Error::ContactForm(_)));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
