use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::error::{Result, AUTHORIZE_INSTRUCTION};
use crate::models::remote::{AccountInfo, RemoteMe};
use crate::services::hh_client::HhClient;
use crate::utils::time::epoch_to_rfc3339;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authorized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

impl AuthStatus {
    fn unauthorized(error: Option<String>) -> Self {
        Self {
            authorized: false,
            user: None,
            access_expires_at: None,
            error,
            instruction: Some(AUTHORIZE_INSTRUCTION.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct AccountService {
    client: Arc<HhClient>,
}

impl AccountService {
    pub fn new(client: Arc<HhClient>) -> Self {
        Self { client }
    }

    /// Probes `/me` with the stored token. Never fails: an unusable token is
    /// reported as `authorized: false` with the reason.
    #[instrument(skip(self))]
    pub async fn check_auth(&self) -> Result<AuthStatus> {
        if !self.client.is_authorized().await {
            return Ok(AuthStatus::unauthorized(None));
        }

        match self.client.get_as::<RemoteMe>("/me", &[]).await {
            Ok(me) => {
                let expires_at = self
                    .client
                    .current_token()
                    .await
                    .and_then(|t| epoch_to_rfc3339(t.access_expires_at));
                Ok(AuthStatus {
                    authorized: true,
                    user: Some(AccountInfo::from(me)),
                    access_expires_at: expires_at,
                    error: None,
                    instruction: None,
                })
            }
            Err(err) => {
                warn!(error = %err, "Stored token could not be used");
                Ok(AuthStatus::unauthorized(Some(err.to_string())))
            }
        }
    }
}
