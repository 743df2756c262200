use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{require_session, write_failure, ApiError};
use crate::models::{collections, Comment};
use crate::notify::Toast;
use crate::server::app::AppState;
use crate::store::{decode_all, Query, SortDirection};
use crate::validate::{FieldChecks, Validate, ValidationError};

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub name: String,
    pub text: String,
}

impl Validate for CommentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = FieldChecks::new();
        checks
            .required("name", &self.name)
            .required("text", &self.text);
        checks.finish()
    }
}

/// Comments for one project, newest first.
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let docs = state
        .store
        .list(
            collections::COMMENTS,
            Query::all()
                .where_eq("projectId", id.as_str())
                .order_by("createdAt", SortDirection::Desc),
        )
        .await?;
    Ok(Json(decode_all(collections::COMMENTS, docs)?))
}

pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CommentRequest>,
) -> Result<Json<Value>, ApiError> {
    payload.validate()?;

    let doc = state
        .store
        .add(
            collections::COMMENTS,
            json!({
                "projectId": id,
                "name": payload.name.trim(),
                "text": payload.text.trim(),
            }),
        )
        .await
        .map_err(|err| write_failure(err, "Error submitting comment"))?;
    let comment: Comment = doc.decode(collections::COMMENTS)?;

    Ok(Json(json!({
        "comment": comment,
        "toast": Toast::success("Comment submitted successfully!"),
    })))
}

/// All comments across projects for the admin reviews panel.
pub async fn admin_list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Comment>>, ApiError> {
    require_session(&state, &headers)?;
    let docs = state
        .store
        .list(
            collections::COMMENTS,
            Query::all().order_by("createdAt", SortDirection::Desc),
        )
        .await?;
    Ok(Json(decode_all(collections::COMMENTS, docs)?))
}

pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    require_session(&state, &headers)?;
    state
        .store
        .delete(collections::COMMENTS, &id)
        .await
        .map_err(|err| write_failure(err, "Error deleting review"))?;
    Ok(Json(
        json!({ "toast": Toast::success("Review deleted successfully!") }),
    ))
}
