use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{require_session, write_failure, ApiError};
use crate::models::{collections, ContactMessage};
use crate::notify::Toast;
use crate::server::app::AppState;
use crate::store::{decode_all, Query, SortDirection};
use crate::validate::{FieldChecks, Validate, ValidationError};

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Validate for ContactRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = FieldChecks::new();
        checks
            .required("name", &self.name)
            .required("email", &self.email)
            .email("email", &self.email)
            .required("subject", &self.subject)
            .required("message", &self.message)
            .min_len("message", &self.message, 10);
        checks.finish()
    }
}

pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<Value>, ApiError> {
    payload.validate()?;

    state
        .store
        .add(
            collections::CONTACTS,
            json!({
                "name": payload.name.trim(),
                "email": payload.email.trim(),
                "subject": payload.subject.trim(),
                "message": payload.message.trim(),
                "read": false,
            }),
        )
        .await
        .map_err(|err| write_failure(err, "Error sending message"))?;

    Ok(Json(
        json!({ "toast": Toast::success("Message sent successfully!") }),
    ))
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    require_session(&state, &headers)?;
    let docs = state
        .store
        .list(
            collections::CONTACTS,
            Query::all().order_by("createdAt", SortDirection::Desc),
        )
        .await?;
    Ok(Json(decode_all(collections::CONTACTS, docs)?))
}

pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    require_session(&state, &headers)?;
    state
        .store
        .delete(collections::CONTACTS, &id)
        .await
        .map_err(|err| write_failure(err, "Error deleting contact message"))?;
    Ok(Json(
        json!({ "toast": Toast::success("Contact message deleted successfully!") }),
    ))
}

/// Flip the read flag. The store only supports whole-document
/// replacement, so the existing fields are re-written with `read`
/// set.
pub async fn mark_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    require_session(&state, &headers)?;

    let doc = state
        .store
        .get(collections::CONTACTS, &id)
        .await?
        .ok_or_else(|| {
            ApiError::Store(crate::store::StoreError::NotFound {
                collection: collections::CONTACTS.to_string(),
                id: id.clone(),
            })
        })?;

    let mut fields = doc.fields;
    fields.insert("read".to_string(), Value::Bool(true));
    state
        .store
        .update(collections::CONTACTS, &id, Value::Object(fields))
        .await?;

    Ok(Json(json!({ "status": "ok" })))
}
