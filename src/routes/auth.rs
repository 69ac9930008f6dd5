use axum::{extract::State, Json};

use crate::error::Result;
use crate::services::account_service::AuthStatus;
use crate::AppState;

#[axum::debug_handler]
pub async fn auth_status(State(state): State<AppState>) -> Result<Json<AuthStatus>> {
    let status = state.account_service.check_auth().await?;
    Ok(Json(status))
}
