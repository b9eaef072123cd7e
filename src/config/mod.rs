pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PermitError, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rica-permit")]
#[command(about = "Import permit application service")]
pub struct CliConfig {
    /// Load settings from a TOML file instead of the flags below.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "0.0.0.0")]
    pub address: String,

    #[arg(long, default_value = "5000")]
    pub port: u16,

    /// Directory holding applications.json.
    #[arg(long, default_value = "./data/applications")]
    pub data_path: String,

    /// HTTP mail relay endpoint; mail is disabled when unset.
    #[arg(long)]
    pub mail_endpoint: Option<String>,

    #[arg(long, default_value = "no-reply@permits.gov.rw")]
    pub mail_from: String,

    #[arg(long, default_value = "permit-reviews@permits.gov.rw")]
    pub reviewer_email: String,

    /// Exact CORS origin to allow; any origin when unset.
    #[arg(long)]
    pub allowed_origin: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Sanity-checks the configuration before the server starts.
    pub fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}

impl ConfigProvider for CliConfig {
    fn address(&self) -> &str {
        &self.address
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn mail_endpoint(&self) -> Option<&str> {
        self.mail_endpoint.as_deref()
    }

    fn mail_from(&self) -> &str {
        &self.mail_from
    }

    fn reviewer_email(&self) -> &str {
        &self.reviewer_email
    }

    fn allowed_origin(&self) -> Option<&str> {
        self.allowed_origin.as_deref()
    }
}

pub(crate) fn validate_settings(cfg: &impl ConfigProvider) -> Result<()> {
    if cfg.port() == 0 {
        return Err(PermitError::ConfigError { message: "port must be non-zero".to_string() });
    }
    if cfg.data_path().is_empty() {
        return Err(PermitError::ConfigError {
            message: "data path must not be empty".to_string(),
        });
    }
    if let Some(endpoint) = cfg.mail_endpoint() {
        Url::parse(endpoint).map_err(|e| PermitError::ConfigError {
            message: format!("mail endpoint is not a valid URL: {e}"),
        })?;
    }
    Ok(())
}
