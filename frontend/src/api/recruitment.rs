use reqwest::Method;

use super::client::to_body;
use super::{
    ApiClient, ApiError, ApplicationDecisionRequest, CreateApplicationRequest, CreateJobRequest,
    JobApplication, JobPosting,
};

impl ApiClient {
    pub async fn list_jobs(&self) -> Result<Vec<JobPosting>, ApiError> {
        self.get_data("/recruitment/jobs").await
    }

    pub async fn create_job(&self, request: &CreateJobRequest) -> Result<Option<String>, ApiError> {
        self.mutate(Method::POST, "/recruitment/jobs", Some(to_body(request)?))
            .await
    }

    pub async fn list_applications(&self) -> Result<Vec<JobApplication>, ApiError> {
        self.get_data("/recruitment/applications").await
    }

    pub async fn list_my_applications(&self) -> Result<Vec<JobApplication>, ApiError> {
        self.get_data("/recruitment/applications/me").await
    }

    pub async fn apply_for_job(
        &self,
        request: &CreateApplicationRequest,
    ) -> Result<Option<String>, ApiError> {
        self.mutate(
            Method::POST,
            "/recruitment/applications",
            Some(to_body(request)?),
        )
        .await
    }

    pub async fn decide_application(
        &self,
        id: &str,
        decision: &ApplicationDecisionRequest,
    ) -> Result<Option<String>, ApiError> {
        self.mutate(
            Method::PUT,
            &format!("/recruitment/applications/{}", id),
            Some(to_body(decision)?),
        )
        .await
    }
}
