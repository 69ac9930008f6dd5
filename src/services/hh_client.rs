//! Authenticated accessor for the hh.ru REST API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::token::{Token, TokenResponse};
use crate::services::token_store::{FileTokenStore, TokenStore};
use crate::utils::time::now_epoch;

/// Static application credentials, only sent during a refresh exchange.
#[derive(Debug, Clone, Default)]
pub struct ClientCredentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

enum RequestBody {
    Empty,
    Form(Vec<(String, String)>),
    Json(JsonValue),
}

struct ApiRequest<'a> {
    method: Method,
    path: &'a str,
    query: Vec<(String, String)>,
    body: RequestBody,
}

enum Outcome {
    Success(JsonValue),
    AuthRejected(String),
}

/// One authorized session per process, shared behind an `Arc`.
///
/// Refreshes are single-flight: the refresh, persist and in-memory swap run
/// under `refresh_lock`, and a caller that waited on the lock reuses the token
/// the previous holder obtained instead of spending the rotated refresh token
/// a second time.
pub struct HhClient {
    http: Client,
    base_url: String,
    oauth_url: String,
    user_agent: String,
    credentials: ClientCredentials,
    store: Arc<dyn TokenStore>,
    token: RwLock<Option<Token>>,
    refresh_lock: Mutex<()>,
    unsaved: AtomicBool,
}

impl HhClient {
    pub fn new(base_url: &str, oauth_url: &str, store: Arc<dyn TokenStore>) -> Self {
        let token = store.load();
        if token.is_some() {
            info!("hh.ru client authorized from stored token");
        } else {
            info!("No stored token, hh.ru client running in read-only mode");
        }

        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            oauth_url: oauth_url.to_string(),
            user_agent: format!("hh-applicant-gateway/{}", env!("CARGO_PKG_VERSION")),
            credentials: ClientCredentials::default(),
            store,
            token: RwLock::new(token),
            refresh_lock: Mutex::new(()),
            unsaved: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let store = FileTokenStore::resolve(config.token_path.clone())?;
        info!(path = %store.path().display(), "Using token store");

        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(
            Self::new(&config.hh_api_url, &config.hh_oauth_url, Arc::new(store))
                .with_http_client(http)
                .with_user_agent(&config.hh_user_agent)
                .with_credentials(ClientCredentials {
                    client_id: config.hh_client_id.clone(),
                    client_secret: config.hh_client_secret.clone(),
                }),
        )
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_credentials(mut self, credentials: ClientCredentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub async fn current_token(&self) -> Option<Token> {
        self.token.read().await.clone()
    }

    pub async fn is_authorized(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Fails fast, before any network call, when no token was ever stored.
    pub async fn require_authorized(&self) -> Result<()> {
        if self.is_authorized().await {
            Ok(())
        } else {
            Err(Error::Unauthorized(
                "No OAuth token available; this operation requires authorization".to_string(),
            ))
        }
    }

    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<JsonValue> {
        self.send(ApiRequest {
            method: Method::GET,
            path,
            query: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body: RequestBody::Empty,
        })
        .await
    }

    pub async fn get_as<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let value = self.get(path, params).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn post(&self, path: &str, form: &[(&str, String)]) -> Result<JsonValue> {
        let body = if form.is_empty() {
            RequestBody::Empty
        } else {
            RequestBody::Form(
                form.iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            )
        };
        self.send(ApiRequest {
            method: Method::POST,
            path,
            query: Vec::new(),
            body,
        })
        .await
    }

    pub async fn put(&self, path: &str, body: &JsonValue) -> Result<JsonValue> {
        self.send(ApiRequest {
            method: Method::PUT,
            path,
            query: Vec::new(),
            body: RequestBody::Json(body.clone()),
        })
        .await
    }

    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest<'_>) -> Result<JsonValue> {
        let mut token = self.current_token().await;
        let mut refreshed = false;

        if let Some(stale) = token.clone().filter(|t| t.is_expired_at(now_epoch())) {
            debug!("Access token expired, refreshing before request");
            token = Some(self.refresh(&stale).await?);
            refreshed = true;
        }

        let outcome = self.execute(&request, token.as_ref()).await?;
        let value = match outcome {
            Outcome::Success(value) => value,
            Outcome::AuthRejected(body) => {
                let Some(stale) = token.filter(|_| !refreshed) else {
                    return Err(Error::Unauthorized(format!(
                        "Remote API rejected the credentials: {body}"
                    )));
                };
                warn!("Access token rejected by remote API, refreshing once");
                let fresh = self.refresh(&stale).await?;
                match self.execute(&request, Some(&fresh)).await? {
                    Outcome::Success(value) => value,
                    Outcome::AuthRejected(body) => {
                        return Err(Error::Unauthorized(format!(
                            "Access token rejected again after refresh: {body}"
                        )))
                    }
                }
            }
        };

        self.flush_unsaved().await?;
        Ok(value)
    }

    async fn execute(&self, request: &ApiRequest<'_>, token: Option<&Token>) -> Result<Outcome> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .header("HH-User-Agent", &self.user_agent)
            .header(header::USER_AGENT, &self.user_agent);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(&token.access_token);
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(form) => builder.form(form),
            RequestBody::Json(json) => builder.json(json),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(Outcome::Success(JsonValue::Null));
            }
            return Ok(Outcome::Success(serde_json::from_str(&body)?));
        }

        if is_auth_rejection(status, &body) {
            return Ok(Outcome::AuthRejected(body));
        }

        debug!(status = %status, "Remote API returned an error status");
        Err(Error::Remote {
            status: status.as_u16(),
            body,
        })
    }

    /// Exchanges the refresh token for a new pair, persists it and swaps it in.
    async fn refresh(&self, stale: &Token) -> Result<Token> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.current_token().await {
            if current.access_token != stale.access_token {
                debug!("Token already refreshed by a concurrent request");
                return Ok(current);
            }
        }

        info!("Refreshing OAuth access token");
        let mut form = vec![
            ("grant_type", "refresh_token".to_string()),
            ("refresh_token", stale.refresh_token.clone()),
        ];
        if let Some(client_id) = &self.credentials.client_id {
            form.push(("client_id", client_id.clone()));
        }
        if let Some(client_secret) = &self.credentials.client_secret {
            form.push(("client_secret", client_secret.clone()));
        }

        let response = self
            .http
            .post(&self.oauth_url)
            .header("HH-User-Agent", &self.user_agent)
            .header(header::USER_AGENT, &self.user_agent)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = %status, body = %body, "Token refresh failed");
            return Err(match status {
                StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Error::Unauthorized(format!("Token refresh rejected ({status}): {body}"))
                }
                _ => Error::Remote {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let fresh = serde_json::from_str::<TokenResponse>(&body)?.into_token(now_epoch());

        // The old refresh token is spent now, keep the new pair in memory even
        // if the disk write fails.
        *self.token.write().await = Some(fresh.clone());
        if let Err(err) = self.store.save(&fresh) {
            self.unsaved.store(true, Ordering::SeqCst);
            return Err(err);
        }
        self.unsaved.store(false, Ordering::SeqCst);

        info!(expires_at = fresh.access_expires_at, "OAuth access token refreshed");
        Ok(fresh)
    }

    /// Retries a token write that failed during an earlier refresh.
    async fn flush_unsaved(&self) -> Result<()> {
        if !self.unsaved.load(Ordering::SeqCst) {
            return Ok(());
        }
        let _guard = self.refresh_lock.lock().await;
        if let Some(token) = self.current_token().await {
            self.store.save(&token)?;
        }
        self.unsaved.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// 401, or a 403 whose body carries an `oauth` error such as `token_expired`.
/// Other 403s are business rejections and are left to the caller.
fn is_auth_rejection(status: StatusCode, body: &str) -> bool {
    match status {
        StatusCode::UNAUTHORIZED => true,
        StatusCode::FORBIDDEN => serde_json::from_str::<JsonValue>(body)
            .ok()
            .and_then(|v| v.get("errors").and_then(|e| e.as_array()).cloned())
            .map(|errors| {
                errors
                    .iter()
                    .any(|e| e.get("type").and_then(|t| t.as_str()) == Some("oauth"))
            })
            .unwrap_or(false),
        _ => false,
    }
}
