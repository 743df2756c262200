use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{require_session, write_failure, ApiError};
use crate::models::{collections, Project};
use crate::notify::Toast;
use crate::server::app::AppState;
use crate::store::{decode_all, Query, SortDirection};
use crate::validate::{FieldChecks, Validate, ValidationError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub images: String,
    #[serde(default)]
    pub featured: bool,
}

impl Validate for ProjectRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = FieldChecks::new();
        checks
            .required("title", &self.title)
            .required("category", &self.category)
            .required("description", &self.description)
            .required("image", &self.image);
        checks.finish()
    }
}

impl ProjectRequest {
    fn fields(&self) -> Value {
        json!({
            "title": self.title.trim(),
            "category": self.category.trim(),
            "description": self.description.trim(),
            "image": self.image.trim(),
            "images": self.images.trim(),
            "featured": self.featured,
        })
    }
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Project>>, ApiError> {
    require_session(&state, &headers)?;
    let docs = state
        .store
        .list(
            collections::PROJECTS,
            Query::all().order_by("createdAt", SortDirection::Desc),
        )
        .await?;
    Ok(Json(decode_all(collections::PROJECTS, docs)?))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ProjectRequest>,
) -> Result<Json<Value>, ApiError> {
    require_session(&state, &headers)?;
    payload.validate()?;

    let doc = state
        .store
        .add(collections::PROJECTS, payload.fields())
        .await
        .map_err(|err| write_failure(err, "Error saving project"))?;
    let project: Project = doc.decode(collections::PROJECTS)?;

    Ok(Json(json!({
        "project": project,
        "toast": Toast::success("Project added successfully!"),
    })))
}

pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<ProjectRequest>,
) -> Result<Json<Value>, ApiError> {
    require_session(&state, &headers)?;
    payload.validate()?;

    state
        .store
        .update(collections::PROJECTS, &id, payload.fields())
        .await
        .map_err(|err| write_failure(err, "Error saving project"))?;

    Ok(Json(
        json!({ "toast": Toast::success("Project updated successfully!") }),
    ))
}

pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    require_session(&state, &headers)?;
    state
        .store
        .delete(collections::PROJECTS, &id)
        .await
        .map_err(|err| write_failure(err, "Error deleting project"))?;
    Ok(Json(
        json!({ "toast": Toast::success("Project deleted successfully!") }),
    ))
}
