use crate::api::{
    ApiClient, ApiError, ApplicationDecisionRequest, CreateJobRequest, Department, JobApplication,
    JobPosting,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct RecruitmentRepository {
    client: Rc<ApiClient>,
}

impl RecruitmentRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn applications(&self) -> Result<Vec<JobApplication>, ApiError> {
        self.client.list_applications().await
    }

    pub async fn jobs(&self) -> Result<Vec<JobPosting>, ApiError> {
        self.client.list_jobs().await
    }

    pub async fn departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.list_departments().await
    }

    pub async fn decide(
        &self,
        id: &str,
        decision: ApplicationDecisionRequest,
    ) -> Result<Option<String>, ApiError> {
        self.client.decide_application(id, &decision).await
    }

    pub async fn create_job(&self, request: CreateJobRequest) -> Result<Option<String>, ApiError> {
        self.client.create_job(&request).await
    }
}
