use std::fmt;

use serde::Serialize;
use validator::ValidateEmail;

use super::domain::{SignUpSubmission, StudentRegistration};

pub const CONTACT_FIELD: &str = "contact";
pub const EMAIL_FIELD: &str = "email";

pub const CONTACT_ERROR: &str = "Phone number of 10 digits is accepted";
pub const EMAIL_ERROR: &str = "Invalid email address.";

/// Error attached to one named form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Submission blocked by field validation. Both checks run independently, so
/// a rejection can carry errors for more than one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRejection {
    pub errors: Vec<FieldError>,
}

impl ValidationRejection {
    pub fn field(&self, name: &str) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == name)
    }
}

impl fmt::Display for ValidationRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationRejection {}

/// Guard responsible for producing `StudentRegistration` values.
#[derive(Debug, Default, Clone)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Run both intake checks over an inbound submission.
    pub fn registration_from_submission(
        &self,
        submission: SignUpSubmission,
    ) -> Result<StudentRegistration, ValidationRejection> {
        let mut errors = Vec::new();

        if !ends_in_ten_digits(&submission.contact) {
            errors.push(FieldError {
                field: CONTACT_FIELD,
                message: CONTACT_ERROR,
            });
        }

        if !submission.email.validate_email() {
            errors.push(FieldError {
                field: EMAIL_FIELD,
                message: EMAIL_ERROR,
            });
        }

        if !errors.is_empty() {
            return Err(ValidationRejection { errors });
        }

        let SignUpSubmission {
            full_name,
            email,
            passcode,
            contact,
            stream,
            jyear,
            pyear,
        } = submission;

        Ok(StudentRegistration {
            full_name,
            email,
            passcode,
            contact,
            stream,
            jyear,
            pyear,
        })
    }
}

// Suffix-anchored on purpose: the check only constrains the tail of the
// value, so leading non-digit content or a longer digit run still passes.
fn ends_in_ten_digits(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 10 && bytes[bytes.len() - 10..].iter().all(|byte| byte.is_ascii_digit())
}
