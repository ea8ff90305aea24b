use crate::api::{
    ApiClient, ApiError, Department, Employee, JobApplication, JobPosting, LeaveRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct HrDashboardRepository {
    client: Rc<ApiClient>,
}

impl HrDashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.list_departments().await
    }

    pub async fn jobs(&self) -> Result<Vec<JobPosting>, ApiError> {
        self.client.list_jobs().await
    }

    pub async fn leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_leave_requests().await
    }

    pub async fn applications(&self) -> Result<Vec<JobApplication>, ApiError> {
        self.client.list_applications().await
    }
}
