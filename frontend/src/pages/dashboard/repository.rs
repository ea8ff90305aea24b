use crate::api::{ApiClient, ApiError, AttendanceRecord, LeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn attendance(&self, employee_id: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.get_attendance_history(employee_id).await
    }

    pub async fn leave_requests(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_employee_leave_requests(employee_id).await
    }
}
