use reqwest::Method;

use super::client::to_body;
use super::{
    ApiClient, ApiError, CreateEmployeeRequest, Department, Employee, UpdateEmployeeRequest,
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_data("/employees").await
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get_data("/departments").await
    }

    pub async fn register_employee(
        &self,
        request: &CreateEmployeeRequest,
    ) -> Result<Option<String>, ApiError> {
        self.mutate(Method::POST, "/employees/register", Some(to_body(request)?))
            .await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        request: &UpdateEmployeeRequest,
    ) -> Result<Option<String>, ApiError> {
        self.mutate(
            Method::PUT,
            &format!("/employees/{}", id),
            Some(to_body(request)?),
        )
        .await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<Option<String>, ApiError> {
        self.mutate(Method::DELETE, &format!("/employees/{}", id), None)
            .await
    }
}
