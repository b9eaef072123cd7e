use crate::config::validate_settings;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PermitError, Result};
use serde::{Deserialize, Serialize};

/// TOML equivalent of the CLI flags, for deployments that ship a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub address: String,
    pub port: u16,
    pub data_path: String,
    pub mail_endpoint: Option<String>,
    pub mail_from: String,
    pub reviewer_email: String,
    pub allowed_origin: Option<String>,
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 5000,
            data_path: "./data/applications".to_string(),
            mail_endpoint: None,
            mail_from: "no-reply@permits.gov.rw".to_string(),
            reviewer_email: "permit-reviews@permits.gov.rw".to_string(),
            allowed_origin: None,
            verbose: false,
        }
    }
}

impl FileConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&raw).map_err(|e| PermitError::ConfigError {
            message: format!("failed to parse {path}: {e}"),
        })?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}

impl ConfigProvider for FileConfig {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_partial_file_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
port = 8081
mail_endpoint = "http://relay.local/send"
"#
        )
        .unwrap();

        let cfg = FileConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.address, "0.0.0.0");
        assert_eq!(cfg.mail_endpoint.as_deref(), Some("http://relay.local/send"));
        cfg.validate().unwrap();
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let err = FileConfig::from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, PermitError::ConfigError { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = FileConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, PermitError::IoError(_)));
    }
}
