use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Deliberately permissive email shape: local part and domain
/// separated by `@`, domain contains a dot. Not RFC 5322.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All failing fields of one submission, surfaced inline per field.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary: Vec<String> = self
            .fields
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", summary.join("; "))
    }
}

impl std::error::Error for ValidationError {}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let error_response = serde_json::json!({
            "error": "validation_failed",
            "fields": self.fields,
        });
        (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Collects field failures; each rule is applied independently so a
/// submission reports every broken field at once.
#[derive(Default)]
pub struct FieldChecks {
    errors: Vec<FieldError>,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, "This field is required");
        }
        self
    }

    /// Length rules only flag non-empty input; emptiness is the
    /// `required` rule's message.
    pub fn min_len(&mut self, field: &str, value: &str, min: usize) -> &mut Self {
        let trimmed = value.trim();
        if !trimmed.is_empty() && trimmed.chars().count() < min {
            self.push(
                field,
                format!("Must be at least {} characters long", min),
            );
        }
        self
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        let trimmed = value.trim();
        if !trimmed.is_empty() && !is_valid_email(trimmed) {
            self.push(field, "Please enter a valid email address");
        }
        self
    }

    pub fn range(&mut self, field: &str, value: i64, min: i64, max: i64) -> &mut Self {
        if value < min || value > max {
            self.push(field, format!("Must be between {} and {}", min, max));
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: self.errors,
            })
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
