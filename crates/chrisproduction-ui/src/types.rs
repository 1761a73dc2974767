//! Toast messages shown by the site.
//!
//! The site only ever says two things in a toast: the contact form was
//! received, or something the visitor did could not be completed.

use std::sync::atomic::{AtomicU64, Ordering};

use chrisproduction_core::{ContactFormError, Error};

/// How long an acknowledgement stays on screen.
pub const ACKNOWLEDGEMENT_MS: u32 = 5000;
/// Failures stay longer so the reason can be read.
pub const FAILURE_MS: u32 = 8000;

/// What a toast reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// A contact submission was accepted.
    Acknowledgement,
    /// A theme write or contact submission failed.
    Failure,
}

impl ToastKind {
    /// Modifier class next to `toast`.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Acknowledgement => "toast-ack",
            Self::Failure => "toast-error",
        }
    }

    /// ARIA role, so failures interrupt screen readers.
    pub const fn role(self) -> &'static str {
        match self {
            Self::Acknowledgement => "status",
            Self::Failure => "alert",
        }
    }

    /// Time before the toast removes itself.
    pub const fn dismiss_after_ms(self) -> u32 {
        match self {
            Self::Acknowledgement => ACKNOWLEDGEMENT_MS,
            Self::Failure => FAILURE_MS,
        }
    }
}

/// A toast on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    /// Unique per page view.
    pub id: u64,
    /// Styling and lifetime.
    pub kind: ToastKind,
    /// Text shown to the visitor.
    pub text: String,
}

impl ToastMessage {
    fn new(kind: ToastKind, text: String) -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            text,
        }
    }

    /// Thank-you after a contact submission.
    #[must_use]
    pub fn acknowledgement(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Acknowledgement, text.into())
    }

    /// Visitor-facing report of `error`.
    #[must_use]
    pub fn failure(error: &Error) -> Self {
        Self::new(ToastKind::Failure, failure_text(error))
    }
}

/// Danish wording for an error the visitor caused or can act on.
pub fn failure_text(error: &Error) -> String {
    match error {
        Error::StorageWrite { reason, .. } => format!("Kunne ikke gemme tema: {reason}"),
        Error::StorageRead { reason, .. } => format!("Kunne ikke læse gemt tema: {reason}"),
        Error::StorageUnavailable(reason) => {
            format!("Temavalg gemmes ikke i denne browser: {reason}")
        }
        Error::ContactForm(ContactFormError::MissingField(field)) => {
            format!("{} skal udfyldes", field.label())
        }
        Error::ContactForm(ContactFormError::InvalidEmail(value)) => {
            format!("'{value}' er ikke en gyldig emailadresse")
        }
        Error::Configuration(_) | Error::Serialization(_) => {
            format!("Der opstod en fejl: {error}")
        }
    }
}
