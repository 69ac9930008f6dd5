use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::token::Token;

const TOKEN_KEY: &str = "token";

/// Durable home of the OAuth token triple.
///
/// `save` blocks until the token is on disk so the call that triggered a
/// refresh cannot report success before the new refresh token is durable.
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    /// Missing or unreadable storage yields `None`, never an error.
    fn load(&self) -> Option<Token>;
    fn save(&self, token: &Token) -> Result<()>;
}

/// JSON config file shared with `hh-applicant-tool`, token under `"token"`.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/hh-applicant-tool/config.json`, e.g. `~/.config/...` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hh-applicant-tool").join("config.json"))
    }

    pub fn resolve(path_override: Option<PathBuf>) -> Result<Self> {
        path_override
            .or_else(Self::default_path)
            .map(Self::new)
            .ok_or_else(|| {
                Error::NotConfigured(
                    "Could not determine the configuration directory; set HH_TOKEN_PATH"
                        .to_string(),
                )
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Option<Map<String, JsonValue>> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<JsonValue>(&raw) {
            Ok(JsonValue::Object(map)) => Some(map),
            Ok(_) => {
                warn!(path = %self.path.display(), "Token config is not a JSON object");
                None
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Token config is not valid JSON");
                None
            }
        }
    }

    fn persist_error(&self, err: impl std::fmt::Display) -> Error {
        Error::Persistence(format!("{}: {}", self.path.display(), err))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<Token> {
        let mut document = self.read_document()?;
        let raw_token = document.remove(TOKEN_KEY)?;
        match serde_json::from_value::<Token>(raw_token) {
            Ok(token) if !token.access_token.is_empty() => {
                debug!(path = %self.path.display(), "Loaded OAuth token");
                Some(token)
            }
            Ok(_) => None,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Stored token is malformed");
                None
            }
        }
    }

    fn save(&self, token: &Token) -> Result<()> {
        let mut document = self.read_document().unwrap_or_default();
        let value = serde_json::to_value(token).map_err(|e| self.persist_error(e))?;
        document.insert(TOKEN_KEY.to_string(), value);
        let bytes = serde_json::to_vec_pretty(&document).map_err(|e| self.persist_error(e))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| self.persist_error(e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.persist_error(e))?;
        tmp.write_all(&bytes).map_err(|e| self.persist_error(e))?;
        tmp.flush().map_err(|e| self.persist_error(e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| self.persist_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.persist_error(e.error))?;

        info!(
            path = %self.path.display(),
            expires_at = token.access_expires_at,
            "Persisted OAuth token"
        );
        Ok(())
    }
}
