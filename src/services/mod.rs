pub mod account_service;
pub mod application_service;
pub mod hh_client;
pub mod portfolio_service;
pub mod profile_service;
pub mod resume_service;
pub mod token_store;
pub mod vacancy_service;

use crate::error::{Error, Result};

/// Joins a collection path and a caller-supplied id, refusing ids that would
/// escape the resource (`/`, `?`, `#`, `..`) or are blank.
pub(crate) fn resource_path(collection: &str, id: &str) -> Result<String> {
    let id = id.trim();
    let valid = !id.is_empty()
        && id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if !valid {
        return Err(Error::Validation(format!("Invalid resource id: {id:?}")));
    }
    Ok(format!("{collection}/{id}"))
}
