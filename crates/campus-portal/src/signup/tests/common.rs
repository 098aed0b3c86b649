use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::signup::domain::{
    AccountId, SignUpSubmission, Stream, StudentId, StudentRecord, StudentRegistration,
};
use crate::signup::mailer::{MailEnvelope, MailError, Mailer, NoticeConfig};
use crate::signup::repository::{
    AccountDirectory, RepositoryError, StudentRepository, ADMIN_ACCOUNT,
};
use crate::signup::service::SignUpService;

pub(super) fn submission() -> SignUpSubmission {
    SignUpSubmission {
        full_name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        passcode: "x".to_string(),
        contact: "9876543210".to_string(),
        stream: Stream::Cse,
        jyear: NaiveDate::from_ymd_opt(2021, 8, 1).expect("valid date"),
        pyear: NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date"),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStudents {
    rows: Arc<Mutex<Vec<StudentRecord>>>,
    sequence: Arc<AtomicI64>,
}

impl MemoryStudents {
    pub(super) fn rows(&self) -> Vec<StudentRecord> {
        self.rows.lock().expect("lock").clone()
    }
}

impl StudentRepository for MemoryStudents {
    fn insert(
        &self,
        registration: StudentRegistration,
    ) -> Result<StudentRecord, RepositoryError> {
        let id = StudentId(self.sequence.fetch_add(1, Ordering::Relaxed) + 1);
        let record = StudentRecord { id, registration };
        self.rows.lock().expect("lock").push(record.clone());
        Ok(record)
    }

    fn find_first_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StudentRecord>, RepositoryError> {
        let guard = self.rows.lock().expect("lock");
        Ok(guard
            .iter()
            .find(|record| record.registration.email == email)
            .cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    mailboxes: Arc<Mutex<Vec<(AccountId, String)>>>,
}

impl MemoryDirectory {
    pub(super) fn with_admin(mailbox: &str) -> Self {
        let directory = Self::default();
        directory
            .mailboxes
            .lock()
            .expect("lock")
            .push((ADMIN_ACCOUNT, mailbox.to_string()));
        directory
    }
}

impl AccountDirectory for MemoryDirectory {
    fn mailbox(&self, account: AccountId) -> Result<Option<String>, RepositoryError> {
        let guard = self.mailboxes.lock().expect("lock");
        Ok(guard
            .iter()
            .find(|(id, _)| *id == account)
            .map(|(_, mailbox)| mailbox.clone()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryMailer {
    envelopes: Arc<Mutex<Vec<MailEnvelope>>>,
}

impl MemoryMailer {
    pub(super) fn sent(&self) -> Vec<MailEnvelope> {
        self.envelopes.lock().expect("lock").clone()
    }
}

impl Mailer for MemoryMailer {
    fn send(&self, envelope: MailEnvelope) -> Result<(), MailError> {
        self.envelopes.lock().expect("lock").push(envelope);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct FailingMailer;

impl Mailer for FailingMailer {
    fn send(&self, _envelope: MailEnvelope) -> Result<(), MailError> {
        Err(MailError::Transport("relay offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    SignUpService<MemoryStudents, MemoryDirectory, MemoryMailer>,
    Arc<MemoryStudents>,
    Arc<MemoryMailer>,
) {
    let students = Arc::new(MemoryStudents::default());
    let directory = Arc::new(MemoryDirectory::with_admin("admin@portal.example"));
    let mailer = Arc::new(MemoryMailer::default());
    let service = SignUpService::new(
        students.clone(),
        directory,
        mailer.clone(),
        NoticeConfig::default(),
    );
    (service, students, mailer)
}
