use anyhow::{anyhow, Result};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::SessionGate;
use crate::render::Renderer;
use crate::store::DocumentStore;

use super::handlers::{comments, contacts, dashboard, health, pages, projects, ratings, session};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub auth: Arc<SessionGate>,
    pub renderer: Arc<Renderer>,
}

pub fn create_app(
    store: Arc<dyn DocumentStore>,
    auth: Arc<SessionGate>,
    cors_origin: Option<&str>,
) -> Result<Router> {
    let state = AppState {
        store,
        auth,
        renderer: Arc::new(Renderer::new()?),
    };

    let methods = [
        axum::http::Method::GET,
        axum::http::Method::POST,
        axum::http::Method::PUT,
        axum::http::Method::DELETE,
        axum::http::Method::OPTIONS,
    ];
    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_credentials(false),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_credentials(false),
    };

    let app = Router::new()
        // Rendered pages
        .route("/", get(pages::home_page))
        .route("/projects", get(pages::projects_page))
        .route("/project", get(pages::project_page))
        .route("/about", get(pages::about_page))
        .route("/contact", get(pages::contact_page))
        .route("/admin", get(pages::admin_page))
        // Health check endpoint
        .route("/health", get(health::health_check))
        // Visitor API
        .route("/api/v1/contact", post(contacts::submit))
        .route(
            "/api/v1/projects/:id/comments",
            get(comments::list).post(comments::submit),
        )
        .route(
            "/api/v1/projects/:id/ratings",
            get(ratings::summary).post(ratings::submit),
        )
        .route(
            "/api/v1/session",
            post(session::login).delete(session::logout),
        )
        // Admin API, bearer-token gated
        .route("/api/v1/admin/dashboard", get(dashboard::dashboard))
        .route(
            "/api/v1/admin/projects",
            get(projects::list).post(projects::create),
        )
        .route(
            "/api/v1/admin/projects/:id",
            put(projects::update).delete(projects::remove),
        )
        .route("/api/v1/admin/comments", get(comments::admin_list))
        .route("/api/v1/admin/comments/:id", delete(comments::remove))
        .route("/api/v1/admin/contacts", get(contacts::list))
        .route("/api/v1/admin/contacts/:id", delete(contacts::remove))
        .route("/api/v1/admin/contacts/:id/read", put(contacts::mark_read))
        // Add middleware
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}
