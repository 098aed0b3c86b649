use serde::{Deserialize, Serialize};

use super::domain::{StudentId, StudentRegistration};

/// Template key and locale applied to every registration notice.
#[derive(Debug, Clone)]
pub struct NoticeConfig {
    pub template: String,
    pub langcode: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            template: "portal_submit".to_string(),
            langcode: "en".to_string(),
        }
    }
}

/// Parameter payload carried by both notices: the full field set and the
/// identifier the store assigned to the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailContext {
    pub values: StudentRegistration,
    pub id: StudentId,
}

/// One outbound registration notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailEnvelope {
    pub template: String,
    pub recipient: String,
    pub langcode: String,
    pub context: MailContext,
}

/// Outbound dispatch seam (SMTP relay, queue, or test double).
pub trait Mailer: Send + Sync {
    fn send(&self, envelope: MailEnvelope) -> Result<(), MailError>;
}

/// Mail dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport unavailable: {0}")]
    Transport(String),
}
