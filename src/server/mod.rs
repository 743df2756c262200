pub mod app;
pub mod handlers;

use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::auth::{RestCredentialService, SessionGate};
use crate::config::AppConfig;
use crate::fallback;
use crate::models::collections;
use crate::store::{Document, DocumentStore, MemoryStore, RestStore};

pub async fn start_server(port: u16, config: AppConfig) -> Result<()> {
    let store: Arc<dyn DocumentStore> = if config.offline_mode {
        info!("Offline mode: serving the in-memory demo dataset");
        Arc::new(seeded_store()?)
    } else {
        Arc::new(RestStore::new(&config.store))
    };

    let auth = if config.offline_mode {
        SessionGate::demo(config.demo_login.clone())
    } else {
        SessionGate::remote(Arc::new(RestCredentialService::new(&config.store)))
    };

    let app = app::create_app(store, Arc::new(auth), config.cors_origin.as_deref())?;

    log_routes(port);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// In-memory store pre-loaded with the static dataset, so offline
/// mode serves the same content the fallback path shows.
pub fn seeded_store() -> Result<MemoryStore> {
    let store = MemoryStore::new();
    seed(&store, collections::PROJECTS, fallback::projects())?;
    seed(&store, collections::COMMENTS, fallback::comments())?;
    seed(&store, collections::RATINGS, fallback::ratings())?;
    seed(&store, collections::CONTACTS, fallback::contacts())?;
    Ok(store)
}

fn seed<T: Serialize>(store: &MemoryStore, collection: &str, records: Vec<T>) -> Result<()> {
    for record in records {
        let mut fields = match serde_json::to_value(&record)? {
            Value::Object(map) => map,
            other => bail!("demo record in {} is not an object: {}", collection, other),
        };
        let id = match fields.remove("id") {
            Some(Value::String(id)) => id,
            _ => bail!("demo record in {} has no id", collection),
        };
        store.insert_raw(collection, Document::new(id, fields));
    }
    Ok(())
}

fn log_routes(port: u16) {
    info!("Endpoints:");
    info!("  /                           - Home page");
    info!("  /projects                   - Project listing (?category=)");
    info!("  /project?id=                - Project detail");
    info!("  /about /contact /admin      - Static pages");
    info!("  /health                     - Health check");
    info!("  /api/v1/*                   - REST API (contact, comments, ratings, session, admin)");
    info!("");
    info!("Open http://localhost:{} in your browser", port);
}
