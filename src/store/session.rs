// hackhub-service/src/store/session.rs
//
// Authenticated HTTP session for the REST backend. Every request carries the
// current bearer token; a 401 triggers a token refresh and a single replay.
// Concurrent 401s queue behind one async mutex so at most one refresh request
// is ever in flight; a failed refresh clears the whole session.
use log::{error, info};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tokio::sync::{Mutex, RwLock};

use crate::models::{AuthResponse, ServiceError, User, UserCredentials};

// Namespace key for the persisted session snapshot
pub const SESSION_NAMESPACE: &str = "hackhub-auth";

// Tokens plus the current-user snapshot, persisted across restarts
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

pub struct ApiSession {
    http: reqwest::Client,
    base_url: String,
    session_file: PathBuf,
    snapshot: RwLock<Option<SessionSnapshot>>,
    // Guards the refresh call: late waiters observe the rotated token and
    // skip the upstream request
    refresh_guard: Mutex<()>,
}

impl ApiSession {
    pub fn new(base_url: String, session_file: PathBuf) -> Self {
        let snapshot = Self::load_snapshot(&session_file);
        if snapshot.is_some() {
            info!(
                "🔐 Restored session snapshot from {}",
                session_file.display()
            );
        }

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session_file,
            snapshot: RwLock::new(snapshot),
            refresh_guard: Mutex::new(()),
        }
    }

    fn load_snapshot(path: &PathBuf) -> Option<SessionSnapshot> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn persist_snapshot(&self, snapshot: &SessionSnapshot) -> Result<(), ServiceError> {
        if let Some(parent) = self.session_file.parent() {
            fs::create_dir_all(parent).map_err(|_| ServiceError::InternalServerError)?;
        }
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|_| ServiceError::InternalServerError)?;
        fs::write(&self.session_file, json).map_err(|_| ServiceError::InternalServerError)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn current_user(&self) -> Option<User> {
        self.snapshot.read().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn access_token(&self) -> Option<String> {
        self.snapshot
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    // Log in against the upstream and persist the session
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ServiceError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&UserCredentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            error!("❌ Login rejected by upstream");
            return Err(ServiceError::Unauthorized);
        }

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;

        info!("✅ Logged in to upstream as: {}", auth.user.id);
        self.install(auth).await
    }

    async fn install(&self, auth: AuthResponse) -> Result<User, ServiceError> {
        let snapshot = SessionSnapshot {
            access_token: auth.access_token,
            refresh_token: auth.refresh_token,
            user: auth.user,
        };
        self.persist_snapshot(&snapshot)?;

        let user = snapshot.user.clone();
        *self.snapshot.write().await = Some(snapshot);
        Ok(user)
    }

    // Clear the tokens and the persisted snapshot
    pub async fn logout(&self) {
        *self.snapshot.write().await = None;
        let _ = fs::remove_file(&self.session_file);
    }

    // Single-flight refresh. `stale_token` is the access token the caller
    // saw fail: if the current token already differs, another waiter has
    // refreshed while this one queued and no upstream call is needed.
    async fn refresh(&self, stale_token: &str) -> Result<String, ServiceError> {
        let _guard = self.refresh_guard.lock().await;

        let refresh_token = match self.snapshot.read().await.as_ref() {
            Some(snapshot) if snapshot.access_token != stale_token => {
                return Ok(snapshot.access_token.clone());
            }
            Some(snapshot) => snapshot.refresh_token.clone(),
            None => return Err(ServiceError::Unauthorized),
        };

        info!("🔄 Access token rejected, refreshing session");

        let outcome = self
            .http
            .post(self.url("/auth/refresh"))
            .json(&serde_json::json!({ "refreshToken": refresh_token }))
            .send()
            .await;

        let response = match outcome {
            Ok(response) if response.status().is_success() => response,
            outcome => {
                // A failed refresh invalidates the whole session
                error!("❌ Token refresh failed, clearing session");
                self.logout().await;
                return Err(match outcome {
                    Ok(_) => ServiceError::Unauthorized,
                    Err(e) => ServiceError::Upstream(e.to_string()),
                });
            }
        };

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        let fresh = auth.access_token.clone();
        self.install(auth).await?;

        Ok(fresh)
    }

    async fn send_once(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ServiceError> {
        let mut request = self.http.request(method, self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))
    }

    // Issue an authorized request; on a 401, refresh once and replay
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> Result<reqwest::Response, ServiceError> {
        let token = self.access_token().await;
        let response = self
            .send_once(method.clone(), path, query, body.as_ref(), token.as_deref())
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            let stale = token.ok_or(ServiceError::Unauthorized)?;
            let fresh = self.refresh(&stale).await?;
            let retry = self
                .send_once(method, path, query, body.as_ref(), Some(&fresh))
                .await?;
            return Self::into_checked(retry).await;
        }

        Self::into_checked(response).await
    }

    // Map upstream error statuses onto the service error taxonomy, carrying
    // a best-effort description from the body
    async fn into_checked(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => ServiceError::NotFound,
            StatusCode::UNAUTHORIZED => ServiceError::Unauthorized,
            StatusCode::FORBIDDEN => ServiceError::Forbidden,
            StatusCode::BAD_REQUEST => ServiceError::BadRequest(message),
            StatusCode::CONFLICT => ServiceError::Conflict(message),
            _ => ServiceError::Upstream(format!("{}: {}", status, message)),
        })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ServiceError> {
        let response = self.execute(Method::GET, path, query, None).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))
    }

    pub async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let value = serde_json::to_value(body).map_err(|_| ServiceError::InternalServerError)?;
        let response = self.execute(Method::POST, path, &[], Some(value)).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))
    }

    pub async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let value = serde_json::to_value(body).map_err(|_| ServiceError::InternalServerError)?;
        let response = self.execute(Method::PUT, path, &[], Some(value)).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let response = self.execute(Method::DELETE, path, &[], None).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))
    }
}
