use super::domain::{AccountId, StudentRecord, StudentRegistration};

/// The administrative account: the first identity created in the system.
pub const ADMIN_ACCOUNT: AccountId = AccountId(1);

/// Storage seam for the students table.
pub trait StudentRepository: Send + Sync {
    /// Insert one registration row and return it with the generated key.
    fn insert(&self, registration: StudentRegistration) -> Result<StudentRecord, RepositoryError>;

    /// First row matching the email exactly, in insertion order. Emails are
    /// not unique, so duplicates resolve to the oldest row.
    fn find_first_by_email(&self, email: &str)
        -> Result<Option<StudentRecord>, RepositoryError>;
}

/// Read seam for the account directory holding mail addresses.
pub trait AccountDirectory: Send + Sync {
    fn mailbox(&self, account: AccountId) -> Result<Option<String>, RepositoryError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("row constraint violated: {0}")]
    Constraint(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
