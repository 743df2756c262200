//! API integration tests
//!
//! End-to-end tests for the rendered pages and the REST API, running
//! against the in-memory store.

use anyhow::Result;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use folio::auth::SessionGate;
use folio::config::DemoCredentials;
use folio::server::app::create_app;
use folio::server::seeded_store;
use folio::store::{DocumentStore, MemoryStore, UnreachableStore};

fn demo_gate() -> Arc<SessionGate> {
    Arc::new(SessionGate::demo(DemoCredentials::default()))
}

/// Test server over an empty in-memory store.
fn setup_test_server() -> Result<TestServer> {
    let app = create_app(Arc::new(MemoryStore::new()), demo_gate(), Some("*"))?;
    Ok(TestServer::new(app)?)
}

/// Test server over the demo dataset.
fn setup_seeded_server() -> Result<TestServer> {
    let app = create_app(Arc::new(seeded_store()?), demo_gate(), None)?;
    Ok(TestServer::new(app)?)
}

/// Test server whose store fails every call, for the fallback paths.
fn setup_unreachable_server() -> Result<TestServer> {
    let store: Arc<dyn DocumentStore> = Arc::new(UnreachableStore);
    let app = create_app(store, demo_gate(), None)?;
    Ok(TestServer::new(app)?)
}

async fn login(server: &TestServer) -> String {
    let response = server
        .post("/api/v1/session")
        .json(&json!({"email": "admin@demo.com", "password": "admin123"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body["token"].as_str().expect("session token").to_string()
}

fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("header value"),
    )
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let server = setup_test_server()?;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["service"], "folio");
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_home_page_shows_featured_projects() -> Result<()> {
    let server = setup_seeded_server()?;

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    assert!(html.contains("E-Commerce Platform"));
    assert!(html.contains("Mobile Banking App"));
    assert!(html.contains("Portfolio Website Design"));

    Ok(())
}

#[tokio::test]
async fn test_projects_page_category_filter() -> Result<()> {
    let server = setup_seeded_server()?;

    let response = server.get("/projects").add_query_param("category", "mobile").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    assert!(html.contains(r#"data-filter="mobile" class="filter-btn active""#));
    assert!(html.contains("Mobile Apps"));
    assert!(!html.contains("E-Commerce Platform"));

    Ok(())
}

#[tokio::test]
async fn test_unknown_category_shows_empty_grid_not_everything() -> Result<()> {
    let server = setup_seeded_server()?;

    let response = server.get("/projects").add_query_param("category", "gamedev").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    assert!(html.contains("No projects found matching your criteria."));
    assert!(!html.contains("E-Commerce Platform"));
    assert_eq!(html.matches("filter-btn active").count(), 0);

    // Without a category parameter the full list still renders
    let response = server.get("/projects").await;
    let html = response.text();
    assert!(html.contains("E-Commerce Platform"));
    assert!(html.contains(r#"data-filter="all" class="filter-btn active""#));

    Ok(())
}

#[tokio::test]
async fn test_project_page_without_id_redirects_to_listing() -> Result<()> {
    let server = setup_seeded_server()?;

    let response = server.get("/project").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/projects");

    Ok(())
}

#[tokio::test]
async fn test_project_page_with_unknown_id_redirects_to_listing() -> Result<()> {
    let server = setup_seeded_server()?;

    let response = server.get("/project").add_query_param("id", "no-such-id").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/projects");

    Ok(())
}

#[tokio::test]
async fn test_project_detail_renders_comments_and_rating() -> Result<()> {
    let server = setup_seeded_server()?;

    let response = server.get("/project").add_query_param("id", "1").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    assert!(html.contains("E-Commerce Platform"));
    assert!(html.contains("Sarah Johnson"));
    assert!(html.contains("Based on 12 ratings"));
    assert!(html.contains("4.5"));

    Ok(())
}

#[tokio::test]
async fn test_unreachable_store_pages_fall_back() -> Result<()> {
    let server = setup_unreachable_server()?;

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("E-Commerce Platform"));

    let response = server.get("/projects").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Analytics Dashboard"));

    // A detail request cannot distinguish "missing" from "down", so it
    // serves the canned page under the requested id.
    let response = server.get("/project").add_query_param("id", "7").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Sarah Johnson"));

    Ok(())
}

#[tokio::test]
async fn test_contact_form_validation_reports_every_field() -> Result<()> {
    let server = setup_test_server()?;

    let response = server
        .post("/api/v1/contact")
        .json(&json!({
            "name": "",
            "email": "not-an-email",
            "subject": "Hello",
            "message": "short"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "validation_failed");

    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "message"]);

    Ok(())
}

#[tokio::test]
async fn test_contact_message_boundary_length() -> Result<()> {
    let server = setup_test_server()?;

    // Nine characters fails the ten-character minimum
    let response = server
        .post("/api/v1/contact")
        .json(&json!({
            "name": "John Smith",
            "email": "john@example.com",
            "subject": "Inquiry",
            "message": "123456789"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["fields"].as_array().unwrap().len(), 1);
    assert_eq!(body["fields"][0]["field"], "message");
    assert_eq!(
        body["fields"][0]["message"],
        "Must be at least 10 characters long"
    );

    // Ten characters passes
    let response = server
        .post("/api/v1/contact")
        .json(&json!({
            "name": "John Smith",
            "email": "john@example.com",
            "subject": "Inquiry",
            "message": "1234567890"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["toast"]["message"], "Message sent successfully!");
    assert_eq!(body["toast"]["level"], "success");
    assert_eq!(body["toast"]["duration_ms"], 5000);

    Ok(())
}

#[tokio::test]
async fn test_contact_submission_reaches_the_admin_list() -> Result<()> {
    let server = setup_test_server()?;

    let response = server
        .post("/api/v1/contact")
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Collaboration",
            "message": "Interested in collaborating on a project."
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let token = login(&server).await;
    let (name, value) = bearer(&token);
    let response = server.get("/api/v1/admin/contacts").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let contacts: Vec<Value> = response.json();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["name"], "Jane Doe");
    assert_eq!(contacts[0]["read"], false);
    assert!(contacts[0]["createdAt"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_mark_contact_read() -> Result<()> {
    let server = setup_seeded_server()?;
    let token = login(&server).await;

    let (name, value) = bearer(&token);
    let response = server
        .put("/api/v1/admin/contacts/1/read")
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let (name, value) = bearer(&token);
    let response = server.get("/api/v1/admin/contacts").add_header(name, value).await;
    let contacts: Vec<Value> = response.json();
    let contact = contacts.iter().find(|c| c["id"] == "1").unwrap();
    assert_eq!(contact["read"], true);

    Ok(())
}

#[tokio::test]
async fn test_comment_submit_and_list() -> Result<()> {
    let server = setup_seeded_server()?;

    let response = server
        .post("/api/v1/projects/1/comments")
        .json(&json!({"name": "Alex Kim", "text": "Really solid work."}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["toast"]["message"], "Comment submitted successfully!");
    assert_eq!(body["comment"]["name"], "Alex Kim");
    assert_eq!(body["comment"]["projectId"], "1");

    let response = server.get("/api/v1/projects/1/comments").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let comments: Vec<Value> = response.json();
    // Three seeded plus the new one, newest first
    assert_eq!(comments.len(), 4);
    assert_eq!(comments[0]["name"], "Alex Kim");

    Ok(())
}

#[tokio::test]
async fn test_comment_requires_name_and_text() -> Result<()> {
    let server = setup_seeded_server()?;

    let response = server
        .post("/api/v1/projects/1/comments")
        .json(&json!({"name": " ", "text": ""}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "text"]);

    Ok(())
}

#[tokio::test]
async fn test_rating_submit_recomputes_summary() -> Result<()> {
    let server = setup_seeded_server()?;

    let response = server.get("/api/v1/projects/1/ratings").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let summary: Value = response.json();
    assert_eq!(summary["count"], 12);
    assert_eq!(summary["display"], "4.5");

    let response = server
        .post("/api/v1/projects/1/ratings")
        .json(&json!({"rating": 5}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["toast"]["message"], "Rating submitted successfully!");
    assert_eq!(body["summary"]["count"], 13);

    Ok(())
}

#[tokio::test]
async fn test_rating_outside_range_is_rejected() -> Result<()> {
    let server = setup_seeded_server()?;

    for rating in [0, 6] {
        let response = server
            .post("/api/v1/projects/1/ratings")
            .json(&json!({"rating": rating}))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["fields"][0]["field"], "rating");
        assert_eq!(body["fields"][0]["message"], "Must be between 1 and 5");
    }

    Ok(())
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() -> Result<()> {
    let server = setup_test_server()?;

    let response = server
        .post("/api/v1/session")
        .json(&json!({"email": "admin@demo.com", "password": "wrong"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(
        body["toast"]["message"],
        "Invalid credentials. Use: admin@demo.com / admin123"
    );

    Ok(())
}

#[tokio::test]
async fn test_login_and_logout_round_trip() -> Result<()> {
    let server = setup_test_server()?;

    let response = server
        .post("/api/v1/session")
        .json(&json!({"email": "admin@demo.com", "password": "admin123"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["toast"]["message"], "Login successful! (Demo Mode)");
    let token = body["token"].as_str().unwrap().to_string();

    let (name, value) = bearer(&token);
    let response = server.delete("/api/v1/session").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // The token no longer opens the admin API
    let (name, value) = bearer(&token);
    let response = server.get("/api/v1/admin/projects").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_admin_api_requires_a_session() -> Result<()> {
    let server = setup_seeded_server()?;

    for path in [
        "/api/v1/admin/dashboard",
        "/api/v1/admin/projects",
        "/api/v1/admin/comments",
        "/api/v1/admin/contacts",
    ] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "{}", path);
    }

    let response = server.delete("/api/v1/admin/projects/1").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_admin_projects_crud() -> Result<()> {
    let server = setup_test_server()?;
    let token = login(&server).await;

    // Create
    let (name, value) = bearer(&token);
    let response = server
        .post("/api/v1/admin/projects")
        .add_header(name, value)
        .json(&json!({
            "title": "Portfolio Revamp",
            "category": "web",
            "description": "A rebuilt portfolio with server rendering.",
            "image": "https://example.com/cover.jpg",
            "featured": true
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["toast"]["message"], "Project added successfully!");
    let project_id = body["project"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["project"]["category"], "web");

    // List
    let (name, value) = bearer(&token);
    let response = server.get("/api/v1/admin/projects").add_header(name, value).await;
    let projects: Vec<Value> = response.json();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "Portfolio Revamp");

    // Update
    let (name, value) = bearer(&token);
    let response = server
        .put(&format!("/api/v1/admin/projects/{}", project_id))
        .add_header(name, value)
        .json(&json!({
            "title": "Portfolio Revamp v2",
            "category": "fullstack",
            "description": "A rebuilt portfolio with server rendering.",
            "image": "https://example.com/cover.jpg",
            "featured": false
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["toast"]["message"], "Project updated successfully!");

    // Delete
    let (name, value) = bearer(&token);
    let response = server
        .delete(&format!("/api/v1/admin/projects/{}", project_id))
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["toast"]["message"], "Project deleted successfully!");

    let (name, value) = bearer(&token);
    let response = server.get("/api/v1/admin/projects").add_header(name, value).await;
    let projects: Vec<Value> = response.json();
    assert!(projects.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_admin_project_create_requires_core_fields() -> Result<()> {
    let server = setup_test_server()?;
    let token = login(&server).await;

    let (name, value) = bearer(&token);
    let response = server
        .post("/api/v1/admin/projects")
        .add_header(name, value)
        .json(&json!({
            "title": "",
            "category": "",
            "description": "d",
            "image": ""
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "category", "image"]);

    Ok(())
}

#[tokio::test]
async fn test_admin_delete_review() -> Result<()> {
    let server = setup_seeded_server()?;
    let token = login(&server).await;

    let (name, value) = bearer(&token);
    let response = server
        .delete("/api/v1/admin/comments/2")
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["toast"]["message"], "Review deleted successfully!");

    let response = server.get("/api/v1/projects/1/comments").await;
    let comments: Vec<Value> = response.json();
    assert_eq!(comments.len(), 2);
    assert!(comments.iter().all(|c| c["name"] != "Mike Chen"));

    Ok(())
}

#[tokio::test]
async fn test_dashboard_fragment_renders_stats() -> Result<()> {
    let server = setup_seeded_server()?;
    let token = login(&server).await;

    let (name, value) = bearer(&token);
    let response = server.get("/api/v1/admin/dashboard").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    assert!(html.contains(r#"<span id="total-projects">8</span>"#));
    assert!(html.contains(r#"<span id="total-reviews">3</span>"#));
    assert!(html.contains(r#"<span id="total-contacts">2</span>"#));
    assert!(html.contains(r#"<span id="average-rating">4.5</span>"#));
    assert!(html.contains("Recent Projects"));

    Ok(())
}

#[tokio::test]
async fn test_cors_headers() -> Result<()> {
    let server = setup_test_server()?;

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:3001"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let headers = response.headers();
    assert!(headers.get("access-control-allow-origin").is_some());

    Ok(())
}
