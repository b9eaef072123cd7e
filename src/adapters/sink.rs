//! Client-side submission sink: what a frontend (or test harness) drives the
//! wizard against. Talks plain JSON to `POST /api/applications`.

use crate::domain::model::{ApplicationDraft, FieldError, SubmissionReceipt};
use crate::domain::ports::SubmissionSink;
use crate::utils::error::{PermitError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct HttpSubmissionSink {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<SubmissionReceipt>,
    #[serde(default)]
    errors: Option<Vec<FieldError>>,
}

impl HttpSubmissionSink {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client: Client::new(), base_url }
    }
}

#[async_trait]
impl SubmissionSink for HttpSubmissionSink {
    async fn submit(&self, draft: &ApplicationDraft) -> Result<SubmissionReceipt> {
        let url = format!("{}/api/applications", self.base_url);
        tracing::debug!(%url, "submitting application");

        let response = self.client.post(&url).json(draft).send().await?;
        let status = response.status();
        let body: SubmitResponse = response.json().await.unwrap_or(SubmitResponse {
            message: None,
            data: None,
            errors: None,
        });

        if status.is_success() {
            return body.data.ok_or_else(|| PermitError::SubmissionError {
                message: "server accepted the application but returned no receipt".to_string(),
            });
        }

        if let Some(errors) = body.errors.filter(|e| !e.is_empty()) {
            return Err(PermitError::ValidationError { errors });
        }

        Err(PermitError::SubmissionError {
            message: body
                .message
                .unwrap_or_else(|| format!("server answered {status}")),
        })
    }
}
