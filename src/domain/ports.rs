use crate::domain::model::{ApplicationDraft, FieldError, SubmissionReceipt, SubmissionRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Full-draft schema validation. An empty list means the draft is valid;
/// otherwise the errors come back in canonical field order.
pub trait DraftValidator: Send + Sync {
    fn validate(&self, draft: &ApplicationDraft) -> Vec<FieldError>;
}

/// Append-only persistence for submitted applications.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn append(&self, record: &SubmissionRecord) -> Result<()>;
    async fn find(&self, id: &str) -> Result<Option<SubmissionRecord>>;
    async fn list(&self) -> Result<Vec<SubmissionRecord>>;
}

/// Outbound notifications for a persisted submission.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Confirmation to the applicant. Callers only invoke this when the
    /// applicant left an email address.
    async fn send_confirmation(&self, record: &SubmissionRecord) -> Result<()>;

    /// Heads-up to the reviewing team, sent for every submission.
    async fn send_review_notification(&self, record: &SubmissionRecord) -> Result<()>;
}

/// Where the wizard hands a finished draft. Implementations return
/// `PermitError::ValidationError` when the server rejects individual fields,
/// anything else is a transport/server failure.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, draft: &ApplicationDraft) -> Result<SubmissionReceipt>;
}

pub trait ConfigProvider: Send + Sync {
    fn address(&self) -> &str;
    fn port(&self) -> u16;
    fn data_path(&self) -> &str;
    fn mail_endpoint(&self) -> Option<&str>;
    fn mail_from(&self) -> &str;
    fn reviewer_email(&self) -> &str;
    /// CORS origin to allow; `None` allows any origin.
    fn allowed_origin(&self) -> Option<&str>;
}
