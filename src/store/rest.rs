use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use super::{Document, DocumentStore, Query, SortDirection, StoreError};
use crate::config::StoreConfig;

/// Client for the hosted document store's REST surface. One URL per
/// collection, where/order/limit as query parameters, API key in a
/// header. Wire consistency and query execution belong to the store.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: format!(
                "https://{}/v1/projects/{}",
                config.auth_domain, config.project_id
            ),
            api_key: config.api_key.clone(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/collections/{}", self.base_url, collection)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/collections/{}/{}", self.base_url, collection, id)
    }

    fn check_status(
        &self,
        collection: &str,
        id: Option<&str>,
        status: StatusCode,
    ) -> Result<(), StoreError> {
        match status {
            StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
                Err(StoreError::PermissionDenied(collection.to_string()))
            }
            StatusCode::NOT_FOUND => Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.unwrap_or("?").to_string(),
            }),
            status if !status.is_success() => {
                Err(StoreError::Network(format!("unexpected status {}", status)))
            }
            _ => Ok(()),
        }
    }
}

fn network_err(err: reqwest::Error) -> StoreError {
    StoreError::Network(err.to_string())
}

fn query_params(query: &Query) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some((field, value)) = &query.filter {
        params.push(("where".to_string(), field.clone()));
        let encoded = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        params.push(("equals".to_string(), encoded));
    }
    if let Some((field, direction)) = &query.order_by {
        params.push(("orderBy".to_string(), field.clone()));
        let direction = match direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        params.push(("direction".to_string(), direction.to_string()));
    }
    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    params
}

#[async_trait]
impl DocumentStore for RestStore {
    async fn list(&self, collection: &str, query: Query) -> Result<Vec<Document>, StoreError> {
        let response = self
            .client
            .get(self.collection_url(collection))
            .header("x-api-key", &self.api_key)
            .query(&query_params(&query))
            .send()
            .await
            .map_err(network_err)?;
        self.check_status(collection, None, response.status())?;

        let docs: Vec<Document> = response.json().await.map_err(network_err)?;
        Ok(docs)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let response = self
            .client
            .get(self.document_url(collection, id))
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(network_err)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.check_status(collection, Some(id), response.status())?;

        let doc: Document = response.json().await.map_err(network_err)?;
        Ok(Some(doc))
    }

    async fn add(&self, collection: &str, fields: Value) -> Result<Document, StoreError> {
        let response = self
            .client
            .post(self.collection_url(collection))
            .header("x-api-key", &self.api_key)
            .json(&fields)
            .send()
            .await
            .map_err(network_err)?;
        self.check_status(collection, None, response.status())?;

        let doc: Document = response.json().await.map_err(network_err)?;
        Ok(doc)
    }

    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.document_url(collection, id))
            .header("x-api-key", &self.api_key)
            .json(&fields)
            .send()
            .await
            .map_err(network_err)?;
        self.check_status(collection, Some(id), response.status())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.document_url(collection, id))
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(network_err)?;
        self.check_status(collection, Some(id), response.status())
    }
}
