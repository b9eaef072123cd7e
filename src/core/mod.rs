pub mod rules;
pub mod submit;
pub mod wizard;

pub use crate::domain::model::{ApplicationDraft, FieldError, SubmissionReceipt, SubmissionRecord};
pub use crate::domain::ports::{
    ConfigProvider, DraftValidator, Notifier, SubmissionSink, SubmissionStore,
};
pub use crate::utils::error::Result;
