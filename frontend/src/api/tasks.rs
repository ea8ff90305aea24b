use reqwest::Method;

use super::client::to_body;
use super::{ApiClient, ApiError, DepartmentTask, TaskStatusRequest, TaskUpdateRequest};

impl ApiClient {
    pub async fn list_my_tasks(&self) -> Result<Vec<DepartmentTask>, ApiError> {
        self.get_data("/tasks/me").await
    }

    pub async fn post_task_update(
        &self,
        id: &str,
        update: &TaskUpdateRequest,
    ) -> Result<Option<String>, ApiError> {
        self.mutate(
            Method::POST,
            &format!("/tasks/{}/updates", id),
            Some(to_body(update)?),
        )
        .await
    }

    pub async fn set_task_status(
        &self,
        id: &str,
        request: &TaskStatusRequest,
    ) -> Result<Option<String>, ApiError> {
        self.mutate(Method::PUT, &format!("/tasks/{}", id), Some(to_body(request)?))
            .await
    }
}
