use campus_portal::signup::{
    AccountDirectory, AccountId, MailEnvelope, MailError, Mailer, RepositoryError, Stream,
    StudentId, StudentRecord, StudentRegistration, StudentRepository, ADMIN_ACCOUNT,
};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Order-preserving student store. Emails are not unique; the first-match
/// lookup resolves duplicates to the oldest row.
#[derive(Default, Clone)]
pub(crate) struct InMemoryStudentRepository {
    rows: Arc<Mutex<Vec<StudentRecord>>>,
    sequence: Arc<AtomicI64>,
}

impl StudentRepository for InMemoryStudentRepository {
    fn insert(
        &self,
        registration: StudentRegistration,
    ) -> Result<StudentRecord, RepositoryError> {
        let id = StudentId(self.sequence.fetch_add(1, Ordering::Relaxed) + 1);
        let record = StudentRecord { id, registration };
        let mut guard = self.rows.lock().expect("student store mutex poisoned");
        guard.push(record.clone());
        Ok(record)
    }

    fn find_first_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StudentRecord>, RepositoryError> {
        let guard = self.rows.lock().expect("student store mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| record.registration.email == email)
            .cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAccountDirectory {
    mailboxes: Arc<Mutex<HashMap<i64, String>>>,
}

impl InMemoryAccountDirectory {
    /// Directory seeded with the administrative identity.
    pub(crate) fn with_admin(mailbox: impl Into<String>) -> Self {
        let directory = Self::default();
        directory
            .mailboxes
            .lock()
            .expect("directory mutex poisoned")
            .insert(ADMIN_ACCOUNT.0, mailbox.into());
        directory
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    fn mailbox(&self, account: AccountId) -> Result<Option<String>, RepositoryError> {
        let guard = self.mailboxes.lock().expect("directory mutex poisoned");
        Ok(guard.get(&account.0).cloned())
    }
}

/// Records envelopes instead of reaching an SMTP relay; each dispatch is
/// also logged so operators can follow the notice flow.
#[derive(Default, Clone)]
pub(crate) struct RecordingMailer {
    envelopes: Arc<Mutex<Vec<MailEnvelope>>>,
}

impl RecordingMailer {
    pub(crate) fn sent(&self) -> Vec<MailEnvelope> {
        self.envelopes.lock().expect("mailer mutex poisoned").clone()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, envelope: MailEnvelope) -> Result<(), MailError> {
        info!(
            template = %envelope.template,
            recipient = %envelope.recipient,
            "dispatching registration notice"
        );
        self.envelopes
            .lock()
            .expect("mailer mutex poisoned")
            .push(envelope);
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_stream(raw: &str) -> Result<Stream, String> {
    raw.parse()
}
