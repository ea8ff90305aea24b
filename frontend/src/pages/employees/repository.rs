use crate::api::{
    ApiClient, ApiError, CreateEmployeeRequest, Department, Employee, UpdateEmployeeRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
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

    pub async fn register(&self, request: CreateEmployeeRequest) -> Result<Option<String>, ApiError> {
        self.client.register_employee(&request).await
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateEmployeeRequest,
    ) -> Result<Option<String>, ApiError> {
        self.client.update_employee(id, &request).await
    }

    pub async fn delete(&self, id: &str) -> Result<Option<String>, ApiError> {
        self.client.delete_employee(id).await
    }
}
