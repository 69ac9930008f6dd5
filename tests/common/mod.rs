#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use hh_applicant_gateway::error::Result;
use hh_applicant_gateway::models::token::Token;
use hh_applicant_gateway::services::hh_client::HhClient;
use hh_applicant_gateway::services::token_store::TokenStore;
use wiremock::MockServer;

/// In-memory token store that counts writes.
#[derive(Default)]
pub struct MemoryStore {
    token: Mutex<Option<Token>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn with_token(token: Token) -> Arc<Self> {
        Arc::new(Self {
            token: Mutex::new(Some(token)),
            saves: AtomicUsize::new(0),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Option<Token> {
        self.token.lock().unwrap().clone()
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<Token> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &Token) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(())
    }
}

pub fn valid_token() -> Token {
    Token {
        access_token: "valid-access".into(),
        refresh_token: "valid-refresh".into(),
        access_expires_at: chrono::Utc::now().timestamp() + 3600,
    }
}

pub fn expired_token() -> Token {
    Token {
        access_token: "old-access".into(),
        refresh_token: "old-refresh".into(),
        access_expires_at: chrono::Utc::now().timestamp() - 10,
    }
}

pub fn oauth_url(server: &MockServer) -> String {
    format!("{}/oauth/token", server.uri())
}

pub fn client(server: &MockServer, store: Arc<MemoryStore>) -> Arc<HhClient> {
    Arc::new(HhClient::new(&server.uri(), &oauth_url(server), store))
}

pub fn refreshed_token_body() -> serde_json::Value {
    serde_json::json!({
        "access_token": "new-access",
        "token_type": "bearer",
        "refresh_token": "new-refresh",
        "expires_in": 1209600
    })
}
