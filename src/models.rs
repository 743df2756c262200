use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Collection names on the hosted store.
pub mod collections {
    pub const PROJECTS: &str = "projects";
    pub const COMMENTS: &str = "comments";
    pub const RATINGS: &str = "ratings";
    pub const CONTACTS: &str = "contacts";
}

/// Project category. Codes without a known display label are shown
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Design,
    Fullstack,
    #[serde(untagged)]
    Other(String),
}

impl Category {
    pub fn display_name(&self) -> &str {
        match self {
            Category::Web => "Web Development",
            Category::Mobile => "Mobile Apps",
            Category::Design => "UI/UX Design",
            Category::Fullstack => "Full Stack",
            Category::Other(raw) => raw,
        }
    }

    /// The raw code as it appears on the wire and in filter keys.
    pub fn key(&self) -> &str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Design => "design",
            Category::Fullstack => "fullstack",
            Category::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub image: String,
    /// Comma-joined gallery URL list, as stored.
    #[serde(default)]
    pub images: String,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn gallery(&self) -> Vec<String> {
        self.images
            .split(',')
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect()
    }
}

/// A visitor review. The referenced project may no longer exist; no
/// referential integrity is enforced on either side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: String,
    pub project_id: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}
