//! The JSON-over-HTTP surface: thin axum wiring around the submission
//! pipeline and the static location lookups.

mod handlers;

use crate::adapters::{JsonFileStore, MailRelayNotifier, MailSettings};
use crate::core::rules::SchemaValidator;
use crate::core::submit::SubmissionService;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub type PermitService = SubmissionService<SchemaValidator, JsonFileStore, Option<MailRelayNotifier>>;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PermitService>,
}

impl AppState {
    pub fn new(service: PermitService) -> Self {
        Self { service: Arc::new(service) }
    }

    pub fn from_config(cfg: &impl ConfigProvider) -> Self {
        let store = JsonFileStore::new(cfg.data_path());

        let notifier = cfg.mail_endpoint().map(|endpoint| {
            MailRelayNotifier::new(MailSettings {
                endpoint: endpoint.to_string(),
                from: cfg.mail_from().to_string(),
                reviewer: cfg.reviewer_email().to_string(),
            })
        });
        if notifier.is_none() {
            tracing::warn!("no mail relay configured, submissions will not send email");
        }

        Self::new(SubmissionService::new(SchemaValidator::new(), store, notifier))
    }
}

pub fn router(state: AppState, allowed_origin: Option<&str>) -> Router {
    let cors = match allowed_origin.map(|o| o.parse::<HeaderValue>()) {
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(Err(_)) => {
            tracing::warn!("allowed origin is not a valid header value, falling back to any");
            CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
        }
        None => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/applications",
            post(handlers::submit_application).get(handlers::list_applications),
        )
        .route("/api/applications/:id", get(handlers::get_application))
        .route("/api/locations/provinces", get(handlers::get_provinces))
        .route("/api/locations/districts/all", get(handlers::get_all_districts))
        .route("/api/locations/districts/:province_id", get(handlers::get_districts))
        .route("/api/locations/nationalities", get(handlers::get_nationalities))
        .route("/api/locations/country-codes", get(handlers::get_country_codes))
        .fallback(handlers::not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(state)
}

/// Binds and runs the server until Ctrl+C / SIGTERM.
pub async fn serve(cfg: &impl ConfigProvider) -> Result<()> {
    let state = AppState::from_config(cfg);
    let app = router(state, cfg.allowed_origin());

    let address = format!("{}:{}", cfg.address(), cfg.port());
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, "server listening");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
