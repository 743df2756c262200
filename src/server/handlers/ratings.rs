use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use super::{write_failure, ApiError};
use crate::models::collections;
use crate::notify::Toast;
use crate::server::app::AppState;
use crate::validate::FieldChecks;
use crate::views::project_detail::rating_summary;
use crate::views::RatingSummary;

#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub rating: i64,
}

pub async fn summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RatingSummary>, ApiError> {
    Ok(Json(rating_summary(state.store.as_ref(), &id).await?))
}

/// Record a star rating and return the recomputed summary. A rating
/// is anonymous; only the submitting user agent is kept alongside it.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<RatingRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut checks = FieldChecks::new();
    checks.range("rating", payload.rating, 1, 5);
    checks.finish()?;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    state
        .store
        .add(
            collections::RATINGS,
            json!({
                "projectId": id,
                "rating": payload.rating,
                "userAgent": user_agent,
            }),
        )
        .await
        .map_err(|err| write_failure(err, "Error submitting rating"))?;

    // The write succeeded; a failed re-read only costs the fresh
    // summary, not the submission.
    let summary = match rating_summary(state.store.as_ref(), &id).await {
        Ok(summary) => Some(summary),
        Err(err) => {
            warn!("re-reading ratings for {} failed: {}", id, err);
            None
        }
    };

    Ok(Json(json!({
        "toast": Toast::success("Rating submitted successfully!"),
        "summary": summary,
    })))
}
