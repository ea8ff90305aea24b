use crate::api::{ApiClient, ApiError, AttendanceMarkRequest, AttendanceRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn history(&self, employee_id: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.get_attendance_history(employee_id).await
    }

    /// Returns the server's message, if any.
    pub async fn mark(&self, request: AttendanceMarkRequest) -> Result<Option<String>, ApiError> {
        self.client
            .mark_attendance(&request)
            .await
            .map(|(_, message)| message)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{attendance_json, wrap};
    use crate::state::session::SessionStore;
    use crate::test_support::helpers::employee_user;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn attendance_repository_reads_history_and_marks() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/employee/u-employee");
            then.status(200).json_body(wrap(json!([attendance_json(
                "2025-01-10",
                Some("2025-01-10T03:30:00.000Z"),
                None
            )])));
        });
        let mark = server.mock(|when, then| {
            when.method(POST)
                .path("/api/attendance")
                .json_body(json!({ "status": "present", "remarks": "Regular check-out" }));
            then.status(200).json_body(json!({ "data": {}, "message": "Checked out" }));
        });

        let session = SessionStore::in_memory();
        session.save("tok", &employee_user()).unwrap();
        let repo = AttendanceRepository::new(ApiClient::new_with_base_url(server.url("/api"), session));

        let history = repo.history("u-employee").await.unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].check_out_time.is_none());

        let message = repo
            .mark(AttendanceMarkRequest {
                status: "present".into(),
                remarks: "Regular check-out".into(),
            })
            .await
            .unwrap();
        assert_eq!(message.as_deref(), Some("Checked out"));
        mark.assert();
    }
}
