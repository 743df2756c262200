pub mod comments;
pub mod contacts;
pub mod dashboard;
pub mod health;
pub mod pages;
pub mod projects;
pub mod ratings;
pub mod session;

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::auth::Session;
use crate::notify::Toast;
use crate::server::app::AppState;
use crate::store::StoreError;
use crate::validate::ValidationError;

/// API failure surface: validation errors keep their per-field body,
/// store errors map onto an HTTP status, write failures carry the
/// user-facing toast.
pub enum ApiError {
    Validation(ValidationError),
    Store(StoreError),
    Unauthorized,
    Failed { status: StatusCode, toast: Toast },
    Internal,
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => err.into_response(),
            ApiError::Store(err) => {
                let status = store_status(&err);
                (status, Json(json!({ "error": err.to_string() }))).into_response()
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "authentication required" })),
            )
                .into_response(),
            ApiError::Failed { status, toast } => {
                (status, Json(json!({ "toast": toast }))).into_response()
            }
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal error" })),
            )
                .into_response(),
        }
    }
}

fn store_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::Network(_) => StatusCode::BAD_GATEWAY,
        StoreError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Malformed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A failed write becomes its user-facing error toast.
pub fn write_failure(err: StoreError, message: &str) -> ApiError {
    error!("{}: {}", message, err);
    ApiError::Failed {
        status: store_status(&err),
        toast: Toast::error(message),
    }
}

pub fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Resolve the bearer token to a live admin session.
pub fn require_session(state: &AppState, headers: &HeaderMap) -> Result<Session, ApiError> {
    bearer(headers)
        .and_then(|token| state.auth.session(token))
        .ok_or(ApiError::Unauthorized)
}
