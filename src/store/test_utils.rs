use async_trait::async_trait;
use serde_json::Value;

use super::{Document, DocumentStore, Query, StoreError};

/// Store whose every call fails with a network error. Exercises the
/// degraded/offline render path.
pub struct UnreachableStore;

fn unreachable_err() -> StoreError {
    StoreError::Network("store is unreachable".to_string())
}

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn list(&self, _collection: &str, _query: Query) -> Result<Vec<Document>, StoreError> {
        Err(unreachable_err())
    }

    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<Document>, StoreError> {
        Err(unreachable_err())
    }

    async fn add(&self, _collection: &str, _fields: Value) -> Result<Document, StoreError> {
        Err(unreachable_err())
    }

    async fn update(&self, _collection: &str, _id: &str, _fields: Value) -> Result<(), StoreError> {
        Err(unreachable_err())
    }

    async fn delete(&self, _collection: &str, _id: &str) -> Result<(), StoreError> {
        Err(unreachable_err())
    }
}
