use axum::{extract::State, Json};
use serde_json::Value as JsonValue;

use crate::dto::application_dto::PortfolioQuery;
use crate::dto::extract::ApiQuery;
use crate::error::Result;
use crate::models::portfolio::PortfolioListing;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_portfolio(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PortfolioQuery>,
) -> Result<Json<PortfolioListing>> {
    let listing = state
        .portfolio_service
        .list_projects(query.relevance.as_deref())?;
    Ok(Json(listing))
}

#[axum::debug_handler]
pub async fn get_profile(State(state): State<AppState>) -> Result<Json<JsonValue>> {
    let profile = state.profile_service.load()?;
    Ok(Json(profile))
}
