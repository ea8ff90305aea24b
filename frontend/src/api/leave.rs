use reqwest::Method;

use super::client::to_body;
use super::{ApiClient, ApiError, CreateLeaveRequest, LeaveDecisionRequest, LeaveRequest};

impl ApiClient {
    pub async fn list_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_data("/leave").await
    }

    pub async fn list_employee_leave_requests(
        &self,
        employee_id: &str,
    ) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_data(&format!("/leave/employee/{}", employee_id))
            .await
    }

    pub async fn create_leave_request(
        &self,
        request: &CreateLeaveRequest,
    ) -> Result<Option<String>, ApiError> {
        self.mutate(Method::POST, "/leave", Some(to_body(request)?))
            .await
    }

    pub async fn decide_leave_request(
        &self,
        id: &str,
        decision: &LeaveDecisionRequest,
    ) -> Result<Option<String>, ApiError> {
        self.mutate(Method::PUT, &format!("/leave/{}", id), Some(to_body(decision)?))
            .await
    }
}
