use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Connection settings for the hosted document store. The key names
/// match what the store's console hands out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_key: "your-api-key-here".to_string(),
            auth_domain: "your-project.example.com".to_string(),
            project_id: "your-project-id".to_string(),
            storage_bucket: "your-project.appspot.com".to_string(),
            messaging_sender_id: "123456789".to_string(),
            app_id: "your-app-id".to_string(),
        }
    }
}

/// Credential pair accepted by the demo login path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoCredentials {
    pub email: String,
    pub password: String,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            email: "admin@demo.com".to_string(),
            password: "admin123".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub store: StoreConfig,
    /// Explicit deployment switch for running without the hosted
    /// store: in-memory data and the demo credential pair. Never
    /// inferred from placeholder configuration values.
    #[serde(default)]
    pub offline_mode: bool,
    #[serde(default)]
    pub demo_login: DemoCredentials,
    #[serde(default)]
    pub cors_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            offline_mode: false,
            demo_login: DemoCredentials::default(),
            cors_origin: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading configuration file {}", path))?;
        let config: AppConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing configuration file {}", path))?;
        Ok(config)
    }

    /// Configuration for the offline demo deployment.
    pub fn demo() -> Self {
        Self {
            offline_mode: true,
            ..Self::default()
        }
    }
}
