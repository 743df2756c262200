//! Server-rendered pages. Every read goes through the views layer, so
//! a failing store degrades to fallback content instead of an error
//! page; only template failures surface a 500.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use handlebars::RenderError;
use serde::Deserialize;
use tracing::error;

use crate::server::app::AppState;
use crate::views;
use crate::views::project_detail::Detail;

fn render_failure(err: RenderError) -> StatusCode {
    error!("rendering failed: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}

pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let cards = views::home::featured_cards(state.store.as_ref()).await;
    let body = state.renderer.featured_grid(&cards).map_err(render_failure)?;
    Ok(Html(state.renderer.page("Home", &body).map_err(render_failure)?))
}

#[derive(Debug, Deserialize)]
pub struct ProjectsParams {
    #[serde(default)]
    category: String,
}

pub async fn projects_page(
    State(state): State<AppState>,
    Query(params): Query<ProjectsParams>,
) -> Result<Html<String>, StatusCode> {
    let projects = views::projects::all_projects(state.store.as_ref()).await;
    let category = if params.category.is_empty() {
        "all"
    } else {
        params.category.as_str()
    };
    let page = views::projects::page(&projects, category);
    let body = state.renderer.projects_grid(&page).map_err(render_failure)?;
    Ok(Html(
        state
            .renderer
            .page("Projects", &body)
            .map_err(render_failure)?,
    ))
}

#[derive(Debug, Deserialize)]
pub struct DetailParams {
    id: Option<String>,
}

/// Detail page for one project. Without an `id` parameter, or when
/// the store says the project does not exist, the visitor is sent
/// back to the listing.
pub async fn project_page(
    State(state): State<AppState>,
    Query(params): Query<DetailParams>,
) -> Result<Response, StatusCode> {
    let Some(id) = params.id.filter(|id| !id.is_empty()) else {
        return Ok(Redirect::to("/projects").into_response());
    };

    match views::project_detail::load(state.store.as_ref(), &id).await {
        Detail::Missing => Ok(Redirect::to("/projects").into_response()),
        Detail::Found(page) => {
            let body = state
                .renderer
                .project_detail(&page)
                .map_err(render_failure)?;
            let html = state
                .renderer
                .page(&page.project.title, &body)
                .map_err(render_failure)?;
            Ok(Html(html).into_response())
        }
    }
}

pub async fn about_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let body = state.renderer.about_page().map_err(render_failure)?;
    Ok(Html(state.renderer.page("About", &body).map_err(render_failure)?))
}

pub async fn contact_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let body = state.renderer.contact_page().map_err(render_failure)?;
    Ok(Html(
        state
            .renderer
            .page("Contact", &body)
            .map_err(render_failure)?,
    ))
}

pub async fn admin_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let body = state.renderer.admin_shell().map_err(render_failure)?;
    Ok(Html(state.renderer.page("Admin", &body).map_err(render_failure)?))
}
