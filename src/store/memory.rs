use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use super::{Document, DocumentStore, Query, SortDirection, StoreError};

/// In-process store used for demo/offline mode and tests. Behaves
/// like the hosted one: ids and `createdAt` are assigned on add, and
/// queries evaluate where-equals, order-by and limit.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document verbatim, keeping its id and timestamps.
    /// Used to seed demo data.
    pub fn insert_raw(&self, collection: &str, doc: Document) {
        let mut collections = self.collections.write().expect("store lock poisoned");
        collections
            .entry(collection.to_string())
            .or_default()
            .push(doc);
    }

    fn apply(query: &Query, mut docs: Vec<Document>) -> Vec<Document> {
        if let Some((field, value)) = &query.filter {
            docs.retain(|doc| doc.fields.get(field) == Some(value));
        }
        if let Some((field, direction)) = &query.order_by {
            docs.sort_by(|a, b| {
                let ord = compare_values(a.fields.get(field), b.fields.get(field));
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        if let Some(limit) = query.limit {
            docs.truncate(limit);
        }
        docs
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> std::cmp::Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(std::cmp::Ordering::Equal),
        // RFC 3339 timestamps order correctly as strings
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Greater,
        (None, Some(_)) => std::cmp::Ordering::Less,
        _ => std::cmp::Ordering::Equal,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str, query: Query) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().expect("store lock poisoned");
        let docs = collections.get(collection).cloned().unwrap_or_default();
        Ok(Self::apply(&query, docs))
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().expect("store lock poisoned");
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn add(&self, collection: &str, fields: Value) -> Result<Document, StoreError> {
        let mut fields: Map<String, Value> = match fields {
            Value::Object(map) => map,
            other => {
                return Err(StoreError::Malformed {
                    collection: collection.to_string(),
                    message: format!("expected an object, got {}", other),
                })
            }
        };
        fields.insert(
            "createdAt".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let doc = Document::new(Uuid::new_v4().to_string(), fields);
        self.insert_raw(collection, doc.clone());
        Ok(doc)
    }

    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<(), StoreError> {
        let replacement = match fields {
            Value::Object(map) => map,
            other => {
                return Err(StoreError::Malformed {
                    collection: collection.to_string(),
                    message: format!("expected an object, got {}", other),
                })
            }
        };

        let mut collections = self.collections.write().expect("store lock poisoned");
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        // Replace field data, keep the original createdAt stamp
        let created_at = doc.fields.get("createdAt").cloned();
        doc.fields = replacement;
        if let Some(created_at) = created_at {
            doc.fields.entry("createdAt".to_string()).or_insert(created_at);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().expect("store lock poisoned");
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        if docs.len() == before {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
