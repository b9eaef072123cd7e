use crate::domain::model::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PermitError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation failed for {} field(s)", .errors.len())]
    ValidationError { errors: Vec<FieldError> },

    #[error("Notification error: {message}")]
    NotifyError { message: String },

    #[error("Submission rejected: {message}")]
    SubmissionError { message: String },

    #[error("Application not found: {id}")]
    NotFound { id: String },
}

pub type Result<T> = std::result::Result<T, PermitError>;
