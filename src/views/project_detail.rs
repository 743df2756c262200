use serde::Serialize;
use tracing::warn;

use crate::fallback;
use crate::models::{collections, Comment, Project, Rating};
use crate::store::{decode_all, DocumentStore, Query, SortDirection, StoreError};
use crate::views::{format_date, load_or_fallback, RatingSummary};

#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub gallery: Vec<String>,
    pub date: String,
    pub featured: bool,
}

impl ProjectView {
    fn new(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            category: project.category.display_name().to_string(),
            description: project.description.clone(),
            gallery: project.gallery(),
            date: format_date(&project.created_at),
            featured: project.featured,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentView {
    pub name: String,
    pub text: String,
    pub date: String,
}

impl CommentView {
    fn new(comment: &Comment) -> Self {
        Self {
            name: comment.name.clone(),
            text: comment.text.clone(),
            date: format_date(&comment.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetailPage {
    pub project: ProjectView,
    pub comments: Vec<CommentView>,
    pub rating: RatingSummary,
}

/// Outcome of resolving the detail-page id parameter.
pub enum Detail {
    Found(Box<DetailPage>),
    /// The store answered and the project does not exist; the caller
    /// redirects to the listing page.
    Missing,
}

/// Load the detail page for one project. A store failure substitutes
/// the canned detail, reviews and 4.5/12 summary through the same
/// view structs the online path uses. A clean "does not exist" answer
/// is not a failure: it redirects instead of rendering canned data
/// under a bogus id.
pub async fn load(store: &dyn DocumentStore, id: &str) -> Detail {
    let project = match fetch_project(store, id).await {
        Ok(Some(project)) => project,
        Ok(None) => return Detail::Missing,
        Err(err) => {
            warn!("loading project {} failed, using fallback data: {}", id, err);
            return Detail::Found(Box::new(canned_page(id)));
        }
    };

    let comments = load_or_fallback(
        "project comments",
        fetch_comments(store, id),
        fallback::comments,
    )
    .await;

    let rating = rating_summary_or_fallback(store, id).await;

    Detail::Found(Box::new(DetailPage {
        project: ProjectView::new(&project),
        comments: comments.iter().map(CommentView::new).collect(),
        rating,
    }))
}

async fn fetch_project(store: &dyn DocumentStore, id: &str) -> Result<Option<Project>, StoreError> {
    match store.get(collections::PROJECTS, id).await? {
        Some(doc) => Ok(Some(doc.decode(collections::PROJECTS)?)),
        None => Ok(None),
    }
}

async fn fetch_comments(store: &dyn DocumentStore, id: &str) -> Result<Vec<Comment>, StoreError> {
    let docs = store
        .list(
            collections::COMMENTS,
            Query::all()
                .where_eq("projectId", id)
                .order_by("createdAt", SortDirection::Desc),
        )
        .await?;
    decode_all(collections::COMMENTS, docs)
}

/// Re-read every rating document for the project and compute the mean
/// client-side. O(n) in ratings ever cast; fine at this scale.
pub async fn rating_summary(
    store: &dyn DocumentStore,
    id: &str,
) -> Result<RatingSummary, StoreError> {
    let docs = store
        .list(collections::RATINGS, Query::all().where_eq("projectId", id))
        .await?;
    let ratings: Vec<Rating> = decode_all(collections::RATINGS, docs)?;
    let values: Vec<u8> = ratings.iter().map(|r| r.rating).collect();
    Ok(RatingSummary::from_values(&values))
}

pub async fn rating_summary_or_fallback(store: &dyn DocumentStore, id: &str) -> RatingSummary {
    load_or_fallback("project rating", rating_summary(store, id), || {
        RatingSummary::new(4.5, 12)
    })
    .await
}

fn canned_page(id: &str) -> DetailPage {
    DetailPage {
        project: ProjectView::new(&fallback::project_detail(id)),
        comments: fallback::comments().iter().map(CommentView::new).collect(),
        rating: RatingSummary::new(4.5, 12),
    }
}
