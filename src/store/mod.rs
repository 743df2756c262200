pub mod memory;
pub mod rest;
pub mod test_utils;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub use memory::MemoryStore;
pub use rest::RestStore;
pub use test_utils::UnreachableStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("permission denied for collection {0}")]
    PermissionDenied(String),
    #[error("document {collection}/{id} not found")]
    NotFound { collection: String, id: String },
    #[error("malformed document in {collection}: {message}")]
    Malformed { collection: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Read shape supported by the hosted store: optional where-equals
/// filter, optional order-by, optional limit. Everything richer is a
/// non-goal; the collaborator owns query execution.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filter: Option<(String, Value)>,
    pub order_by: Option<(String, SortDirection)>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn where_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filter = Some((field.to_string(), value.into()));
        self
    }

    pub fn order_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.order_by = Some((field.to_string(), direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One persisted record: the store-assigned id merged with the field
/// data, the way the pages consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Deserialize into a typed record, id included.
    pub fn decode<T: DeserializeOwned>(&self, collection: &str) -> Result<T, StoreError> {
        serde_json::from_value(serde_json::to_value(self).unwrap_or(Value::Null)).map_err(|err| {
            StoreError::Malformed {
                collection: collection.to_string(),
                message: err.to_string(),
            }
        })
    }
}

/// The remote document database, reduced to the operations the site
/// actually issues. Eventually consistent and network-fallible; the
/// caller owns the degraded-mode policy.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list(&self, collection: &str, query: Query) -> Result<Vec<Document>, StoreError>;
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;
    /// Persist a new record. The store assigns the id and stamps
    /// `createdAt` with its own clock.
    async fn add(&self, collection: &str, fields: Value) -> Result<Document, StoreError>;
    /// Replace the field data of an existing document.
    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<(), StoreError>;
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}

/// Decode a whole listing, dropping nothing: one malformed document
/// fails the read so the fallback path can take over.
pub fn decode_all<T: DeserializeOwned>(
    collection: &str,
    docs: Vec<Document>,
) -> Result<Vec<T>, StoreError> {
    docs.iter().map(|doc| doc.decode(collection)).collect()
}
