use serde::{Deserialize, Serialize};

/// Safety margin subtracted from the token lifetime so a request never leaves
/// with a token that expires in flight.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// OAuth2 token triple as persisted by the authorization tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub access_expires_at: i64,
}

impl Token {
    pub fn is_expired_at(&self, now: i64) -> bool {
        now + EXPIRY_MARGIN_SECS >= self.access_expires_at
    }
}

/// Body of a successful `grant_type=refresh_token` exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl TokenResponse {
    pub fn into_token(self, now: i64) -> Token {
        Token {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            access_expires_at: now + self.expires_in.unwrap_or(0),
        }
    }
}
