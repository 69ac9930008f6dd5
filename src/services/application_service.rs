use std::sync::Arc;

use serde_json::{json, Map, Value as JsonValue};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::application_dto::{ActionResponse, ApplyPayload, UpdateResumePayload};
use crate::error::{Error, Result};
use crate::models::negotiation::{Negotiation, NegotiationList, RemoteNegotiation};
use crate::models::remote::RemotePage;
use crate::services::{hh_client::HhClient, resource_path};
use crate::utils::salary::DEFAULT_CURRENCY;

pub const BUMP_COOLDOWN_HOURS: u32 = 4;

const DUPLICATE_MARKER: &str = "already_applied";
const TOO_EARLY_MARKER: &str = "too_early";

/// A 403 on `/negotiations` means the pair was already submitted; the body
/// marker covers responses that use another status.
fn is_duplicate_application(err: &Error) -> bool {
    match err {
        Error::Remote { status, body } => {
            *status == 403 || body.to_lowercase().contains(DUPLICATE_MARKER)
        }
        _ => false,
    }
}

fn is_bump_too_early(err: &Error) -> bool {
    match err {
        Error::Remote { status, body } => {
            *status == 429 || body.to_lowercase().contains(TOO_EARLY_MARKER)
        }
        _ => false,
    }
}

/// Splits `"Rust, Tokio,, SQL "` into `["Rust", "Tokio", "SQL"]`.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the partial resume document; returns it with the field names it contains.
pub fn build_resume_update(payload: &UpdateResumePayload) -> (JsonValue, Vec<String>) {
    let mut document = Map::new();
    let mut fields = Vec::new();

    if let Some(title) = payload.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        document.insert("title".to_string(), json!(title));
        fields.push("title".to_string());
    }
    if let Some(skills) = payload.skills.as_deref().map(parse_skills) {
        if !skills.is_empty() {
            document.insert("skill_set".to_string(), json!(skills));
            fields.push("skill_set".to_string());
        }
    }
    if let Some(amount) = payload.salary.filter(|s| *s > 0) {
        document.insert(
            "salary".to_string(),
            json!({ "amount": amount, "currency": DEFAULT_CURRENCY }),
        );
        fields.push("salary".to_string());
    }

    (JsonValue::Object(document), fields)
}

/// Write-side operations against the candidate's account.
#[derive(Clone)]
pub struct ApplicationService {
    client: Arc<HhClient>,
}

impl ApplicationService {
    pub fn new(client: Arc<HhClient>) -> Self {
        Self { client }
    }

    #[instrument(
        skip(self, payload),
        fields(vacancy_id = %payload.vacancy_id, resume_id = %payload.resume_id)
    )]
    pub async fn apply(&self, payload: &ApplyPayload) -> Result<ActionResponse> {
        self.client.require_authorized().await?;
        payload.validate()?;

        let mut form = vec![
            ("vacancy_id", payload.vacancy_id.clone()),
            ("resume_id", payload.resume_id.clone()),
        ];
        if let Some(message) = payload.message.as_deref().filter(|m| !m.trim().is_empty()) {
            form.push(("message", message.to_string()));
        }

        match self.client.post("/negotiations", &form).await {
            Ok(_) => {
                info!("Application submitted");
                Ok(ActionResponse::ok(format!(
                    "Applied to vacancy {}",
                    payload.vacancy_id
                )))
            }
            Err(err) if is_duplicate_application(&err) => {
                warn!(error = %err, "Remote reported an existing application");
                Err(Error::DuplicateApplication {
                    vacancy_id: payload.vacancy_id.clone(),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Bumps the resume to the top of search results ("publish").
    #[instrument(skip(self))]
    pub async fn refresh_visibility(&self, resume_id: &str) -> Result<ActionResponse> {
        self.client.require_authorized().await?;
        let path = format!("{}/publish", resource_path("/resumes", resume_id)?);

        match self.client.post(&path, &[]).await {
            Ok(_) => {
                info!("Resume bumped");
                Ok(ActionResponse::ok(format!(
                    "Resume {resume_id} was bumped in search results"
                )))
            }
            Err(err) if is_bump_too_early(&err) => {
                warn!(error = %err, "Resume bump is still on cooldown");
                Err(Error::RateLimited {
                    cooldown_hours: BUMP_COOLDOWN_HOURS,
                })
            }
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn update_resume(
        &self,
        resume_id: &str,
        payload: &UpdateResumePayload,
    ) -> Result<ActionResponse> {
        self.client.require_authorized().await?;
        payload.validate()?;
        let path = resource_path("/resumes", resume_id)?;

        let (document, fields) = build_resume_update(payload);
        if fields.is_empty() {
            return Err(Error::Validation(
                "Nothing to update: supply title, skills or salary".to_string(),
            ));
        }

        self.client.put(&path, &document).await?;
        info!(?fields, "Resume updated");
        Ok(ActionResponse {
            success: true,
            message: "Resume updated".to_string(),
            updated_fields: Some(fields),
        })
    }

    #[instrument(skip(self))]
    pub async fn negotiations(&self) -> Result<NegotiationList> {
        self.client.require_authorized().await?;
        let page: RemotePage<RemoteNegotiation> =
            self.client.get_as("/negotiations", &[]).await?;
        let negotiations: Vec<Negotiation> =
            page.items.into_iter().map(Negotiation::from).collect();
        Ok(NegotiationList {
            total: negotiations.len(),
            negotiations,
        })
    }
}
