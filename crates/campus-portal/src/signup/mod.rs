//! Student sign-up intake: form description, validation, persistence, and
//! registration notices.
//!
//! The store, the account directory, and the mail dispatcher are injected
//! capabilities behind traits so the workflow can run against production
//! infrastructure or in-memory doubles unchanged.

pub mod domain;
pub mod mailer;
pub mod repository;
pub mod router;
pub mod service;
pub mod validate;

#[cfg(test)]
mod tests;

pub use domain::{
    signup_form, AccountId, FieldDescriptor, FieldKind, FormDescriptor, RegistrationView,
    SignUpSubmission, Stream, StudentId, StudentRecord, StudentRegistration,
};
pub use mailer::{MailContext, MailEnvelope, MailError, Mailer, NoticeConfig};
pub use repository::{AccountDirectory, RepositoryError, StudentRepository, ADMIN_ACCOUNT};
pub use router::signup_router;
pub use service::{SignUpError, SignUpService, SubmissionReceipt, SUBMITTED_MESSAGE};
pub use validate::{
    FieldError, IntakeGuard, ValidationRejection, CONTACT_ERROR, CONTACT_FIELD, EMAIL_ERROR,
    EMAIL_FIELD,
};
