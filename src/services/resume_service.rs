use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::models::remote::RemotePage;
use crate::models::resume::{RemoteResume, ResumeDetail, ResumeSummary};
use crate::services::{hh_client::HhClient, resource_path};

#[derive(Clone)]
pub struct ResumeService {
    client: Arc<HhClient>,
}

impl ResumeService {
    pub fn new(client: Arc<HhClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn list_mine(&self) -> Result<Vec<ResumeSummary>> {
        self.client.require_authorized().await?;
        let page: RemotePage<RemoteResume> = self.client.get_as("/resumes/mine", &[]).await?;
        Ok(page.items.into_iter().map(ResumeSummary::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn details(&self, resume_id: &str) -> Result<ResumeDetail> {
        self.client.require_authorized().await?;
        let path = resource_path("/resumes", resume_id)?;
        let resume: RemoteResume = self.client.get_as(&path, &[]).await?;
        Ok(ResumeDetail::from(resume))
    }
}
