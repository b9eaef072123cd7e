pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use adapters::{HttpSubmissionSink, JsonFileStore, MailRelayNotifier, MailSettings};
pub use config::{file::FileConfig, CliConfig};
pub use core::rules::SchemaValidator;
pub use core::submit::SubmissionService;
pub use core::wizard::{SubmitOutcome, WizardController, WizardStep};
pub use utils::error::{PermitError, Result};
