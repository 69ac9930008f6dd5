use axum::{extract::State, Json};

use crate::dto::extract::{ApiPath, ApiQuery};
use crate::dto::search_dto::SearchCriteria;
use crate::error::Result;
use crate::models::vacancy::{VacancyDetail, VacancySearchResult};
use crate::AppState;

#[axum::debug_handler]
pub async fn search_vacancies(
    State(state): State<AppState>,
    ApiQuery(criteria): ApiQuery<SearchCriteria>,
) -> Result<Json<VacancySearchResult>> {
    let result = state.vacancy_service.search(&criteria).await?;
    Ok(Json(result))
}

#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<VacancyDetail>> {
    let vacancy = state.vacancy_service.details(&id).await?;
    Ok(Json(vacancy))
}
