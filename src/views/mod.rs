//! View aggregators: fetch documents, derive display values, hand the
//! result to the render layer. All remote reads go through
//! [`load_or_fallback`] so every page stays populated when the store
//! is unreachable.

pub mod dashboard;
pub mod home;
pub mod project_detail;
pub mod projects;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use tracing::warn;

use crate::models::Project;
use crate::store::StoreError;

/// Run a remote read; on any failure, log it and substitute the
/// static dataset. The caller feeds the result through the same
/// render path either way, so online and offline pages look alike.
/// Reads are never retried and never surface an error to the visitor.
pub async fn load_or_fallback<T>(
    what: &str,
    read: impl Future<Output = Result<T, StoreError>>,
    fallback: impl FnOnce() -> T,
) -> T {
    match read.await {
        Ok(value) => value,
        Err(err) => {
            warn!("loading {} failed, using fallback data: {}", what, err);
            fallback()
        }
    }
}

/// Category filter over the already-fetched project list. The
/// sentinel `"all"` returns the full list; any other key matches the
/// category code exactly, case-sensitive. Input order is preserved.
pub fn filter_projects(all: &[Project], key: &str) -> Vec<Project> {
    if key == "all" {
        return all.to_vec();
    }
    all.iter()
        .filter(|project| project.category.key() == key)
        .cloned()
        .collect()
}

/// Arithmetic mean rounded to one decimal. The empty set is defined
/// as 0.0, never NaN.
pub fn average_rating(ratings: &[u8]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u32 = ratings.iter().map(|&r| r as u32).sum();
    let mean = sum as f64 / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    /// Icon class rendered into the star row.
    pub fn icon_class(self) -> &'static str {
        match self {
            Star::Full => "fas fa-star",
            Star::Half => "fas fa-star-half-alt",
            Star::Empty => "far fa-star",
        }
    }
}

/// Five icons: `floor(a)` full stars, one half star iff the remainder
/// is at least 0.5, the rest empty. No finer granularity.
pub fn star_display(average: f64) -> [Star; 5] {
    let full = average.floor() as usize;
    let full = full.min(5);
    let half = full < 5 && average - average.floor() >= 0.5;

    let mut stars = [Star::Empty; 5];
    for star in stars.iter_mut().take(full) {
        *star = Star::Full;
    }
    if half {
        stars[full] = Star::Half;
    }
    stars
}

/// Truncate to a character budget, appending an ellipsis when
/// anything was cut.
pub fn excerpt(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let cut: String = text.chars().take(budget).collect();
    format!("{}...", cut)
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Everything a project card template needs, precomputed.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub image: String,
    pub date: String,
    pub featured: bool,
}

impl ProjectCard {
    pub fn new(project: &Project, excerpt_budget: usize) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            category: project.category.display_name().to_string(),
            excerpt: excerpt(&project.description, excerpt_budget),
            image: project.image.clone(),
            date: format_date(&project.created_at),
            featured: project.featured,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingSummary {
    pub average: f64,
    pub display: String,
    pub count: usize,
    pub count_label: String,
    pub stars: Vec<&'static str>,
}

impl RatingSummary {
    pub fn from_values(ratings: &[u8]) -> Self {
        let average = average_rating(ratings);
        Self::new(average, ratings.len())
    }

    pub fn new(average: f64, count: usize) -> Self {
        let plural = if count == 1 { "" } else { "s" };
        Self {
            average,
            display: format!("{:.1}", average),
            count,
            count_label: format!("Based on {} rating{}", count, plural),
            stars: star_display(average)
                .iter()
                .map(|star| star.icon_class())
                .collect(),
        }
    }
}
