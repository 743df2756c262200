use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use super::{bearer, ApiError};
use crate::auth::AuthError;
use crate::notify::Toast;
use crate::server::app::AppState;
use crate::validate::FieldChecks;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut checks = FieldChecks::new();
    checks
        .required("email", &payload.email)
        .email("email", &payload.email)
        .required("password", &payload.password);
    checks.finish()?;

    let session = state
        .auth
        .login(payload.email.trim(), &payload.password)
        .await
        .map_err(|err| match err {
            AuthError::InvalidCredentials => {
                let message = if state.auth.is_demo() {
                    "Invalid credentials. Use: admin@demo.com / admin123"
                } else {
                    "Login failed. Please check your credentials."
                };
                ApiError::Failed {
                    status: StatusCode::UNAUTHORIZED,
                    toast: Toast::error(message),
                }
            }
            AuthError::Upstream(err) => {
                warn!("credential service unavailable: {}", err);
                ApiError::Failed {
                    status: StatusCode::BAD_GATEWAY,
                    toast: Toast::error("Login failed. Please check your credentials."),
                }
            }
        })?;

    let toast = if state.auth.is_demo() {
        Toast::success("Login successful! (Demo Mode)")
    } else {
        Toast::success("Login successful!")
    };
    Ok(Json(json!({
        "token": session.token,
        "email": session.email,
        "toast": toast,
    })))
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    if let Some(token) = bearer(&headers) {
        state.auth.logout(token).await.map_err(|err| {
            warn!("logout failed: {}", err);
            ApiError::Failed {
                status: StatusCode::BAD_GATEWAY,
                toast: Toast::error("Error logging out"),
            }
        })?;
    }

    let toast = if state.auth.is_demo() {
        Toast::info("Logged out successfully! (Demo Mode)")
    } else {
        Toast::info("Logged out successfully!")
    };
    Ok(Json(json!({ "toast": toast })))
}
