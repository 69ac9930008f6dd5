use axum::Json;
use serde_json::Value as JsonValue;

use crate::models::reference;

#[axum::debug_handler]
pub async fn areas() -> Json<JsonValue> {
    Json(reference::areas())
}

#[axum::debug_handler]
pub async fn dictionaries() -> Json<JsonValue> {
    Json(reference::dictionaries())
}
