use crate::domain::model::SubmissionRecord;
use crate::domain::ports::SubmissionStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

const APPLICATIONS_FILE: &str = "applications.json";

/// Flat-file store: one pretty-printed JSON array under the data directory.
/// Appends are read-modify-write behind a mutex; this is the single writer
/// the deployment assumes.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), write_lock: Mutex::new(()) }
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.join(APPLICATIONS_FILE)
    }

    /// A missing file reads as an empty list; anything else is an error.
    async fn read_all(&self) -> Result<Vec<SubmissionRecord>> {
        match fs::read(self.file_path()).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, records: &[SubmissionRecord]) -> Result<()> {
        ensure_dir(&self.dir).await?;
        let json = serde_json::to_vec_pretty(records)?;
        fs::write(self.file_path(), json).await?;
        Ok(())
    }
}

async fn ensure_dir(dir: &Path) -> Result<()> {
    if fs::metadata(dir).await.is_err() {
        fs::create_dir_all(dir).await?;
    }
    Ok(())
}

#[async_trait]
impl SubmissionStore for JsonFileStore {
    async fn append(&self, record: &SubmissionRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all().await?;
        records.push(record.clone());
        self.write_all(&records).await
    }

    async fn find(&self, id: &str) -> Result<Option<SubmissionRecord>> {
        Ok(self.read_all().await?.into_iter().find(|r| r.id == id))
    }

    async fn list(&self) -> Result<Vec<SubmissionRecord>> {
        self.read_all().await
    }
}
