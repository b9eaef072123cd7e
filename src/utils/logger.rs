use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for the server binary.
///
/// `RUST_LOG` wins when set; otherwise the verbose flag picks the default
/// level. Safe to call more than once (subsequent calls are no-ops).
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "rica_permit=debug,tower_http=debug"
    } else {
        "rica_permit=info,tower_http=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
