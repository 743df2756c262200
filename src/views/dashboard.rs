use serde::Serialize;
use tracing::warn;

use crate::fallback;
use crate::models::{collections, Comment, Project, Rating};
use crate::store::{decode_all, DocumentStore, Query, SortDirection, StoreError};
use crate::views::{average_rating, excerpt, format_date};

#[derive(Debug, Clone, Serialize)]
pub struct RecentItem {
    pub title: String,
    pub subtitle: String,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_reviews: usize,
    pub total_contacts: usize,
    pub average_rating: String,
    pub recent_projects: Vec<RecentItem>,
    pub recent_reviews: Vec<RecentItem>,
}

/// Admin dashboard aggregation. The six reads are independent, so
/// they fan out concurrently; any failure degrades the whole view to
/// the canned stats.
pub async fn load(store: &dyn DocumentStore) -> DashboardStats {
    match fetch(store).await {
        Ok(stats) => stats,
        Err(err) => {
            warn!("loading dashboard failed, using fallback data: {}", err);
            canned_stats()
        }
    }
}

async fn fetch(store: &dyn DocumentStore) -> Result<DashboardStats, StoreError> {
    let (projects, comments, contacts, ratings, recent_projects, recent_reviews) = tokio::try_join!(
        count(store, collections::PROJECTS),
        count(store, collections::COMMENTS),
        count(store, collections::CONTACTS),
        all_rating_values(store),
        fetch_recent_projects(store),
        fetch_recent_reviews(store),
    )?;

    Ok(DashboardStats {
        total_projects: projects,
        total_reviews: comments,
        total_contacts: contacts,
        average_rating: format!("{:.1}", average_rating(&ratings)),
        recent_projects,
        recent_reviews,
    })
}

async fn count(store: &dyn DocumentStore, collection: &str) -> Result<usize, StoreError> {
    Ok(store.list(collection, Query::all()).await?.len())
}

async fn all_rating_values(store: &dyn DocumentStore) -> Result<Vec<u8>, StoreError> {
    let docs = store.list(collections::RATINGS, Query::all()).await?;
    let ratings: Vec<Rating> = decode_all(collections::RATINGS, docs)?;
    Ok(ratings.iter().map(|r| r.rating).collect())
}

async fn fetch_recent_projects(store: &dyn DocumentStore) -> Result<Vec<RecentItem>, StoreError> {
    let docs = store
        .list(
            collections::PROJECTS,
            Query::all()
                .order_by("createdAt", SortDirection::Desc)
                .limit(5),
        )
        .await?;
    let projects: Vec<Project> = decode_all(collections::PROJECTS, docs)?;
    Ok(projects
        .iter()
        .map(|project| RecentItem {
            title: project.title.clone(),
            subtitle: project.category.display_name().to_string(),
            date: format_date(&project.created_at),
        })
        .collect())
}

async fn fetch_recent_reviews(store: &dyn DocumentStore) -> Result<Vec<RecentItem>, StoreError> {
    let docs = store
        .list(
            collections::COMMENTS,
            Query::all()
                .order_by("createdAt", SortDirection::Desc)
                .limit(5),
        )
        .await?;
    let comments: Vec<Comment> = decode_all(collections::COMMENTS, docs)?;
    Ok(comments
        .iter()
        .map(|comment| RecentItem {
            title: comment.name.clone(),
            subtitle: excerpt(&comment.text, 50),
            date: format_date(&comment.created_at),
        })
        .collect())
}

fn canned_stats() -> DashboardStats {
    let recent_projects = fallback::projects()
        .iter()
        .take(3)
        .map(|project| RecentItem {
            title: project.title.clone(),
            subtitle: project.category.display_name().to_string(),
            date: format_date(&project.created_at),
        })
        .collect();
    let recent_reviews = fallback::comments()
        .iter()
        .take(2)
        .map(|comment| RecentItem {
            title: comment.name.clone(),
            subtitle: excerpt(&comment.text, 50),
            date: format_date(&comment.created_at),
        })
        .collect();

    DashboardStats {
        total_projects: 6,
        total_reviews: 12,
        total_contacts: 8,
        average_rating: "4.5".to_string(),
        recent_projects,
        recent_reviews,
    }
}
