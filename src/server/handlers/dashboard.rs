use axum::{extract::State, http::HeaderMap, response::Html};
use tracing::error;

use super::{require_session, ApiError};
use crate::server::app::AppState;
use crate::views;

/// Rendered dashboard fragment for the admin page. The aggregation
/// itself never fails; it degrades to the canned stats.
pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, ApiError> {
    require_session(&state, &headers)?;

    let stats = views::dashboard::load(state.store.as_ref()).await;
    let html = state.renderer.dashboard(&stats).map_err(|err| {
        error!("rendering dashboard failed: {}", err);
        ApiError::Internal
    })?;
    Ok(Html(html))
}
