use serde::Serialize;

use crate::fallback;
use crate::models::{collections, Project};
use crate::store::{decode_all, DocumentStore, Query, StoreError};
use crate::views::{filter_projects, load_or_fallback, ProjectCard};

/// Filter keys offered on the listing page, sentinel first.
pub const FILTER_KEYS: [(&str, &str); 5] = [
    ("all", "All"),
    ("web", "Web Development"),
    ("mobile", "Mobile Apps"),
    ("design", "UI/UX Design"),
    ("fullstack", "Full Stack"),
];

#[derive(Debug, Clone, Serialize)]
pub struct FilterButton {
    pub key: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct ProjectsPage {
    pub filters: Vec<FilterButton>,
    pub cards: Vec<ProjectCard>,
}

pub async fn all_projects(store: &dyn DocumentStore) -> Vec<Project> {
    load_or_fallback("projects", fetch_all(store), fallback::projects).await
}

async fn fetch_all(store: &dyn DocumentStore) -> Result<Vec<Project>, StoreError> {
    let docs = store.list(collections::PROJECTS, Query::all()).await?;
    decode_all(collections::PROJECTS, docs)
}

/// Apply the category filter to the fetched list. The key is matched
/// verbatim, so a code outside the filter bar still selects whatever
/// carries it (usually nothing, and the grid shows its "no projects"
/// message). Known keys highlight their button; an unknown key
/// highlights none.
pub fn page(projects: &[Project], active_key: &str) -> ProjectsPage {
    let filters = FILTER_KEYS
        .iter()
        .map(|(key, label)| FilterButton {
            key: key.to_string(),
            label: label.to_string(),
            active: *key == active_key,
        })
        .collect();

    let cards = filter_projects(projects, active_key)
        .iter()
        .map(|project| ProjectCard::new(project, 150))
        .collect();

    ProjectsPage { filters, cards }
}
