use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use super::domain::{SignUpSubmission, StudentId, StudentRecord};
use super::mailer::{MailContext, MailEnvelope, MailError, Mailer, NoticeConfig};
use super::repository::{AccountDirectory, RepositoryError, StudentRepository, ADMIN_ACCOUNT};
use super::validate::{IntakeGuard, ValidationRejection};

/// Status message reported to the submitter on success.
pub const SUBMITTED_MESSAGE: &str = "Form Submitted";

/// Service composing the intake guard, the student store, the account
/// directory, and the mail dispatcher.
pub struct SignUpService<R, D, M> {
    students: Arc<R>,
    directory: Arc<D>,
    mailer: Arc<M>,
    guard: IntakeGuard,
    notice: NoticeConfig,
}

impl<R, D, M> SignUpService<R, D, M>
where
    R: StudentRepository + 'static,
    D: AccountDirectory + 'static,
    M: Mailer + 'static,
{
    pub fn new(
        students: Arc<R>,
        directory: Arc<D>,
        mailer: Arc<M>,
        notice: NoticeConfig,
    ) -> Self {
        Self {
            students,
            directory,
            mailer,
            guard: IntakeGuard::default(),
            notice,
        }
    }

    /// Handle one sign-up attempt: validate, persist, then notify the
    /// submitter and the administrative account.
    ///
    /// The insert is not transactionally joined with the notices. A mail
    /// failure after the row is committed surfaces as [`SignUpError::Mail`]
    /// and leaves the row in place.
    pub fn submit(
        &self,
        submission: SignUpSubmission,
    ) -> Result<SubmissionReceipt, SignUpError> {
        let registration = self.guard.registration_from_submission(submission)?;
        let record = self.students.insert(registration)?;

        let context = MailContext {
            values: record.registration.clone(),
            id: record.id,
        };

        self.mailer.send(MailEnvelope {
            template: self.notice.template.clone(),
            recipient: record.registration.email.clone(),
            langcode: self.notice.langcode.clone(),
            context: context.clone(),
        })?;

        let admin_notified = match self.directory.mailbox(ADMIN_ACCOUNT)? {
            Some(mailbox) => {
                self.mailer.send(MailEnvelope {
                    template: self.notice.template.clone(),
                    recipient: mailbox,
                    langcode: self.notice.langcode.clone(),
                    context,
                })?;
                true
            }
            None => {
                warn!(
                    account = ADMIN_ACCOUNT.0,
                    "admin mailbox not found, skipping the admin copy"
                );
                false
            }
        };

        Ok(SubmissionReceipt {
            student_id: record.id,
            message: SUBMITTED_MESSAGE,
            admin_notified,
        })
    }

    /// First registration matching the email, for the status endpoint.
    pub fn lookup(&self, email: &str) -> Result<Option<StudentRecord>, SignUpError> {
        Ok(self.students.find_first_by_email(email)?)
    }
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub student_id: StudentId,
    pub message: &'static str,
    pub admin_notified: bool,
}

/// Error raised by the sign-up service, tagged by kind so callers can map
/// each to its own user-facing report.
#[derive(Debug, thiserror::Error)]
pub enum SignUpError {
    #[error(transparent)]
    Validation(#[from] ValidationRejection),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Mail(#[from] MailError),
}
