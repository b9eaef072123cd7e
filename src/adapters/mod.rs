// Adapters layer: concrete implementations for external systems (flat-file
// persistence, mail relay, the HTTP client the wizard submits through).

pub mod notify;
pub mod sink;
pub mod store;

pub use notify::{MailRelayNotifier, MailSettings};
pub use sink::HttpSubmissionSink;
pub use store::JsonFileStore;
