use axum::{extract::State, http::StatusCode, Json};

use crate::dto::application_dto::{ActionResponse, ApplyPayload};
use crate::dto::extract::ApiJson;
use crate::error::Result;
use crate::models::negotiation::NegotiationList;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_negotiations(State(state): State<AppState>) -> Result<Json<NegotiationList>> {
    let negotiations = state.application_service.negotiations().await?;
    Ok(Json(negotiations))
}

#[axum::debug_handler]
pub async fn apply_to_vacancy(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ApplyPayload>,
) -> Result<(StatusCode, Json<ActionResponse>)> {
    let result = state.application_service.apply(&payload).await?;
    Ok((StatusCode::CREATED, Json(result)))
}
