use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

pub const AUTHORIZE_INSTRUCTION: &str =
    "Run `hh-applicant-tool authorize` in a terminal to obtain a token";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Remote API returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Already applied to vacancy {vacancy_id}")]
    DuplicateApplication { vacancy_id: String },

    #[error("Too early: a resume can be bumped once every {cooldown_hours} hours")]
    RateLimited { cooldown_hours: u32 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not configured: {0}")]
    NotConfigured(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Token persistence failed: {0}")]
    Persistence(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable machine-readable code for the structured error payload.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "config_error",
            Error::Unauthorized(_) => "unauthorized",
            Error::Transport(_) => "transport_error",
            Error::Remote { .. } => "remote_error",
            Error::DuplicateApplication { .. } => "already_applied",
            Error::RateLimited { .. } => "rate_limited",
            Error::Validation(_) => "validation_error",
            Error::NotConfigured(_) => "not_configured",
            Error::NotFound(_) => "not_found",
            Error::Persistence(_) => "persistence_error",
            Error::Json(_) => "invalid_response",
        }
    }

    /// What the caller has to do outside of this service to resolve the error.
    pub fn instruction(&self) -> Option<String> {
        match self {
            Error::Unauthorized(_) => Some(AUTHORIZE_INSTRUCTION.to_string()),
            Error::RateLimited { cooldown_hours } => Some(format!(
                "Wait {cooldown_hours} hours after the previous bump before trying again"
            )),
            Error::NotConfigured(_) => {
                Some("Copy profile.example.json to profile.json and set projects_path".to_string())
            }
            Error::NotFound(_) => {
                Some("Create a PORTFOLIO.md file in each project directory".to_string())
            }
            _ => None,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Transport(_) | Error::Remote { .. } | Error::Json(_) => StatusCode::BAD_GATEWAY,
            Error::DuplicateApplication { .. } => StatusCode::CONFLICT,
            Error::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotConfigured(_) | Error::Config(_) => StatusCode::PRECONDITION_FAILED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let mut body = json!({
            "success": false,
            "error": self.code(),
            "message": self.to_string(),
        });
        if let Some(instruction) = self.instruction() {
            body["instruction"] = json!(instruction);
        }
        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Error::Validation(err.to_string())
    }
}
