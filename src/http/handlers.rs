use crate::domain::locations::{
    districts_of, COUNTRY_CODES, DISTRICTS, NATIONALITIES, PROVINCES,
};
use crate::domain::model::{ApplicationDraft, RequestMeta};
use crate::http::AppState;
use crate::utils::error::PermitError;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::net::SocketAddr;

/// Maps pipeline errors onto the JSON envelope the frontend expects:
/// per-field errors for validation, a single message for everything else.
pub(crate) struct ApiError(PermitError);

impl From<PermitError> for ApiError {
    fn from(err: PermitError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            PermitError::ValidationError { errors } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": "Validation error. Please check the provided data.",
                    "errors": errors,
                })),
            )
                .into_response(),
            err @ PermitError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "success": false, "message": err.to_string() })),
            )
                .into_response(),
            err => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "An unexpected server error occurred.",
                    })),
                )
                    .into_response()
            }
        }
    }
}

pub(crate) async fn submit_application(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Json(draft): Json<ApplicationDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let meta = RequestMeta {
        ip_address: connect_info.map(|ConnectInfo(addr)| addr.ip().to_string()),
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };

    let receipt = state.service.submit(&draft, meta).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Application submitted successfully",
            "data": receipt,
        })),
    ))
}

pub(crate) async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.service.find(&id).await? {
        Some(record) => Ok(Json(json!({ "success": true, "data": record }))),
        None => Err(PermitError::NotFound { id }.into()),
    }
}

pub(crate) async fn list_applications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state.service.list().await?;
    Ok(Json(json!({ "success": true, "data": records })))
}

pub(crate) async fn get_provinces() -> impl IntoResponse {
    Json(json!({ "success": true, "data": PROVINCES }))
}

pub(crate) async fn get_all_districts() -> impl IntoResponse {
    Json(json!({ "success": true, "data": DISTRICTS }))
}

pub(crate) async fn get_districts(Path(province_id): Path<String>) -> impl IntoResponse {
    Json(json!({ "success": true, "data": districts_of(&province_id) }))
}

pub(crate) async fn get_nationalities() -> impl IntoResponse {
    Json(json!({ "success": true, "data": NATIONALITIES }))
}

pub(crate) async fn get_country_codes() -> impl IntoResponse {
    Json(json!({ "success": true, "data": COUNTRY_CODES }))
}

pub(crate) async fn health() -> impl IntoResponse {
    Json(json!({ "status": "up", "version": env!("CARGO_PKG_VERSION") }))
}

pub(crate) async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": format!("Route Not Found - {method} {uri}"),
        })),
    )
}
