use crate::fallback;
use crate::models::{collections, Project};
use crate::store::{decode_all, DocumentStore, Query};
use crate::views::{load_or_fallback, ProjectCard};

/// Featured projects for the home page hero grid: at most three
/// flagged projects, short excerpts.
pub async fn featured_cards(store: &dyn DocumentStore) -> Vec<ProjectCard> {
    let projects = load_or_fallback(
        "featured projects",
        fetch_featured(store),
        fallback::featured_projects,
    )
    .await;

    projects
        .iter()
        .map(|project| ProjectCard::new(project, 100))
        .collect()
}

async fn fetch_featured(store: &dyn DocumentStore) -> Result<Vec<Project>, crate::store::StoreError> {
    let docs = store
        .list(
            collections::PROJECTS,
            Query::all().where_eq("featured", true).limit(3),
        )
        .await?;
    decode_all(collections::PROJECTS, docs)
}
