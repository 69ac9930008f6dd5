use std::path::PathBuf;

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::error::{Error, Result};

const PROJECTS_PATH_KEY: &str = "projects_path";

/// Read-only access to the candidate's `profile.json`.
#[derive(Debug, Clone)]
pub struct ProfileService {
    path: PathBuf,
}

impl ProfileService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The profile document exactly as written by the candidate.
    pub fn load(&self) -> Result<JsonValue> {
        let raw = std::fs::read_to_string(&self.path).map_err(|err| {
            debug!(path = %self.path.display(), error = %err, "Profile not readable");
            Error::NotConfigured(format!("{} not found", self.path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "Profile is not valid JSON");
            Error::NotConfigured(format!("{} is not valid JSON: {}", self.path.display(), err))
        })
    }

    /// Root directory holding one folder per portfolio project.
    pub fn projects_path(&self) -> Result<PathBuf> {
        let profile = self.load()?;
        profile
            .get(PROJECTS_PATH_KEY)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                Error::NotConfigured(format!(
                    "{} is not set in {}",
                    PROJECTS_PATH_KEY,
                    self.path.display()
                ))
            })
    }
}
