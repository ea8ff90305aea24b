use crate::api::{ApiClient, ApiError, CreateApplicationRequest, JobApplication, JobPosting};
use std::rc::Rc;

#[derive(Clone)]
pub struct JobRolesRepository {
    client: Rc<ApiClient>,
}

impl JobRolesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn jobs(&self) -> Result<Vec<JobPosting>, ApiError> {
        self.client.list_jobs().await
    }

    pub async fn my_applications(&self) -> Result<Vec<JobApplication>, ApiError> {
        self.client.list_my_applications().await
    }

    pub async fn apply(&self, request: CreateApplicationRequest) -> Result<Option<String>, ApiError> {
        self.client.apply_for_job(&request).await
    }
}
