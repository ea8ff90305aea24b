use crate::api::{ApiClient, ApiError, LeaveDecisionRequest, LeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveManagementRepository {
    client: Rc<ApiClient>,
}

impl LeaveManagementRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_leave_requests().await
    }

    pub async fn decide(
        &self,
        id: &str,
        decision: LeaveDecisionRequest,
    ) -> Result<Option<String>, ApiError> {
        self.client.decide_leave_request(id, &decision).await
    }
}
