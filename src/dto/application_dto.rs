use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplyPayload {
    #[validate(length(min = 1))]
    pub vacancy_id: String,
    #[validate(length(min = 1))]
    pub resume_id: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateResumePayload {
    #[validate(length(max = 200))]
    pub title: Option<String>,
    /// Comma separated, e.g. `"Rust, Tokio, PostgreSQL"`.
    pub skills: Option<String>,
    #[validate(range(min = 0))]
    pub salary: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_fields: Option<Vec<String>>,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            updated_fields: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioQuery {
    pub relevance: Option<String>,
}
