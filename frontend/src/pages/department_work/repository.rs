use crate::api::{
    ApiClient, ApiError, DepartmentTask, TaskStatus, TaskStatusRequest, TaskUpdateRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct DepartmentWorkRepository {
    client: Rc<ApiClient>,
}

impl DepartmentWorkRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn tasks(&self) -> Result<Vec<DepartmentTask>, ApiError> {
        self.client.list_my_tasks().await
    }

    pub async fn post_update(
        &self,
        task_id: &str,
        update: TaskUpdateRequest,
    ) -> Result<Option<String>, ApiError> {
        self.client.post_task_update(task_id, &update).await
    }

    pub async fn complete(&self, task_id: &str) -> Result<Option<String>, ApiError> {
        let request = TaskStatusRequest {
            status: TaskStatus::Completed,
            progress: 100,
        };
        self.client.set_task_status(task_id, &request).await
    }
}
