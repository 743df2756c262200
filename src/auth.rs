//! Password gate for the admin dashboard. Two mutually exclusive
//! paths selected by the `offlineMode` configuration flag: the demo
//! path compares against the configured credential pair, the real
//! path delegates to the hosted credential service. Sessions are
//! opaque bearer tokens held in memory either way.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{DemoCredentials, StoreConfig};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("credential service error: {0}")]
    Upstream(String),
}

/// The hosted credential checker, treated as an opaque collaborator.
#[async_trait]
pub trait CredentialService: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError>;
    async fn sign_out(&self, email: &str) -> Result<(), AuthError>;
}

pub struct RestCredentialService {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestCredentialService {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: format!("https://{}/v1/auth", config.auth_domain),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl CredentialService for RestCredentialService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/sign-in", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|err| AuthError::Upstream(err.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::InvalidCredentials),
            status if !status.is_success() => {
                Err(AuthError::Upstream(format!("unexpected status {}", status)))
            }
            _ => Ok(()),
        }
    }

    async fn sign_out(&self, email: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/sign-out", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|err| AuthError::Upstream(err.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Upstream(format!(
                "unexpected status {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub email: String,
}

enum Mode {
    Demo(DemoCredentials),
    Remote(Arc<dyn CredentialService>),
}

pub struct SessionGate {
    mode: Mode,
    // token -> email
    sessions: RwLock<HashMap<String, String>>,
}

impl SessionGate {
    pub fn demo(credentials: DemoCredentials) -> Self {
        Self {
            mode: Mode::Demo(credentials),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn remote(service: Arc<dyn CredentialService>) -> Self {
        Self {
            mode: Mode::Remote(service),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self.mode, Mode::Demo(_))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        match &self.mode {
            Mode::Demo(credentials) => {
                if email != credentials.email || password != credentials.password {
                    return Err(AuthError::InvalidCredentials);
                }
            }
            Mode::Remote(service) => service.sign_in(email, password).await?,
        }

        let session = Session {
            token: Uuid::new_v4().to_string(),
            email: email.to_string(),
        };
        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(session.token.clone(), session.email.clone());
        Ok(session)
    }

    /// Logout mirrors the login branch: the demo path only drops the
    /// token, the real path also signs out upstream.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        let email = self
            .sessions
            .write()
            .expect("session lock poisoned")
            .remove(token);

        if let (Mode::Remote(service), Some(email)) = (&self.mode, email) {
            service.sign_out(&email).await?;
        }
        Ok(())
    }

    pub fn session(&self, token: &str) -> Option<Session> {
        self.sessions
            .read()
            .expect("session lock poisoned")
            .get(token)
            .map(|email| Session {
                token: token.to_string(),
                email: email.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_gate() -> SessionGate {
        SessionGate::demo(DemoCredentials::default())
    }

    #[tokio::test]
    async fn demo_login_accepts_the_configured_pair_only() {
        let gate = demo_gate();
        let session = gate.login("admin@demo.com", "admin123").await.unwrap();
        assert!(gate.session(&session.token).is_some());

        let err = gate.login("admin@demo.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        let err = gate.login("other@demo.com", "admin123").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn logout_invalidates_the_token() {
        let gate = demo_gate();
        let session = gate.login("admin@demo.com", "admin123").await.unwrap();
        gate.logout(&session.token).await.unwrap();
        assert!(gate.session(&session.token).is_none());
    }

    #[tokio::test]
    async fn unknown_token_has_no_session() {
        let gate = demo_gate();
        assert!(gate.session("not-a-token").is_none());
    }

    struct AlwaysOk;

    #[async_trait]
    impl CredentialService for AlwaysOk {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<(), AuthError> {
            Ok(())
        }
        async fn sign_out(&self, _email: &str) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn remote_mode_delegates_to_the_credential_service() {
        let gate = SessionGate::remote(Arc::new(AlwaysOk));
        let session = gate.login("someone@example.com", "pw").await.unwrap();
        assert_eq!(session.email, "someone@example.com");
    }
}
