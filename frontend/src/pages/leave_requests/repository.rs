use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRequestsRepository {
    client: Rc<ApiClient>,
}

impl LeaveRequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_employee_leave_requests(employee_id).await
    }

    pub async fn submit(&self, request: CreateLeaveRequest) -> Result<Option<String>, ApiError> {
        self.client.create_leave_request(&request).await
    }
}
