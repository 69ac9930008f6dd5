pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    account_service::AccountService, application_service::ApplicationService,
    hh_client::HhClient, portfolio_service::PortfolioService, profile_service::ProfileService,
    resume_service::ResumeService, vacancy_service::VacancyService,
};

#[derive(Clone)]
pub struct AppState {
    pub hh_client: Arc<HhClient>,
    pub account_service: AccountService,
    pub vacancy_service: VacancyService,
    pub resume_service: ResumeService,
    pub application_service: ApplicationService,
    pub profile_service: ProfileService,
    pub portfolio_service: PortfolioService,
}

impl AppState {
    pub fn new(hh_client: Arc<HhClient>, profile_path: impl Into<PathBuf>) -> Self {
        let profile_service = ProfileService::new(profile_path);

        Self {
            account_service: AccountService::new(hh_client.clone()),
            vacancy_service: VacancyService::new(hh_client.clone()),
            resume_service: ResumeService::new(hh_client.clone()),
            application_service: ApplicationService::new(hh_client.clone()),
            portfolio_service: PortfolioService::new(profile_service.clone()),
            profile_service,
            hh_client,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let hh_client = Arc::new(HhClient::from_config(config)?);
        Ok(Self::new(hh_client, config.profile_path.clone()))
    }
}
