//! Contact form validation.
//!
//! There is no backend: a valid submission is acknowledged with a success
//! notification and the form is cleared. Invalid submissions leave the form
//! untouched and explain what is wrong.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Permissive address shape: `local@domain.tld`, no whitespace, one `@`.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(err) => {
        log::error!("email pattern failed to compile: {err}");
        None
    }
});

/// Message shown after a simulated successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Why a submission was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// The named fields of `#contactForm`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    fn required(&self) -> [&str; 4] {
        [self.name.as_str(), self.email.as_str(), self.subject.as_str(), self.message.as_str()]
    }
}

/// Check presence of every field, then the email shape.
///
/// # Errors
///
/// [`ValidationError::MissingField`] if any field is blank after trimming,
/// otherwise [`ValidationError::InvalidEmail`] for a malformed address.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    if fields.required().iter().any(|value| value.trim().is_empty()) {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Whether `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}
