use axum::{extract::State, Json};

use crate::dto::application_dto::{ActionResponse, UpdateResumePayload};
use crate::dto::extract::{ApiJson, ApiPath};
use crate::error::Result;
use crate::models::resume::{ResumeDetail, ResumeSummary};
use crate::AppState;

#[axum::debug_handler]
pub async fn list_my_resumes(State(state): State<AppState>) -> Result<Json<Vec<ResumeSummary>>> {
    let resumes = state.resume_service.list_mine().await?;
    Ok(Json(resumes))
}

#[axum::debug_handler]
pub async fn get_resume(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<ResumeDetail>> {
    let resume = state.resume_service.details(&id).await?;
    Ok(Json(resume))
}

#[axum::debug_handler]
pub async fn update_resume(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateResumePayload>,
) -> Result<Json<ActionResponse>> {
    let result = state
        .application_service
        .update_resume(&id, &payload)
        .await?;
    Ok(Json(result))
}

#[axum::debug_handler]
pub async fn publish_resume(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<ActionResponse>> {
    let result = state.application_service.refresh_visibility(&id).await?;
    Ok(Json(result))
}
