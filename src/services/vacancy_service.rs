use std::sync::Arc;

use tracing::{info, instrument};
use validator::Validate;

use crate::dto::search_dto::{build_search_params, SearchCriteria};
use crate::error::Result;
use crate::models::remote::RemotePage;
use crate::models::vacancy::{RemoteVacancy, VacancyDetail, VacancySearchResult, VacancySummary};
use crate::services::{hh_client::HhClient, resource_path};

/// Read-only vacancy lookups; work without authorization.
#[derive(Clone)]
pub struct VacancyService {
    client: Arc<HhClient>,
}

impl VacancyService {
    pub fn new(client: Arc<HhClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<VacancySearchResult> {
        criteria.validate()?;
        let params = build_search_params(criteria);
        let page: RemotePage<RemoteVacancy> = self.client.get_as("/vacancies", &params).await?;

        info!(found = page.found, returned = page.items.len(), "Vacancy search completed");
        Ok(VacancySearchResult {
            found: page.found,
            pages: page.pages,
            vacancies: page.items.into_iter().map(VacancySummary::from).collect(),
        })
    }

    #[instrument(skip(self))]
    pub async fn details(&self, vacancy_id: &str) -> Result<VacancyDetail> {
        let path = resource_path("/vacancies", vacancy_id)?;
        let vacancy: RemoteVacancy = self.client.get_as(&path, &[]).await?;
        Ok(VacancyDetail::from(vacancy))
    }
}
