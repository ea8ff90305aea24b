use crate::api::{ApiClient, ApiError, PayrollEntry, PayrollRun, PayrollRunResult};
use std::rc::Rc;

#[derive(Clone)]
pub struct PayrollRepository {
    client: Rc<ApiClient>,
}

impl PayrollRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn entries(&self) -> Result<Vec<PayrollEntry>, ApiError> {
        self.client.list_payroll().await
    }

    pub async fn history(&self) -> Result<Vec<PayrollRun>, ApiError> {
        self.client.list_payroll_history().await
    }

    pub async fn approve(&self, id: &str) -> Result<Option<String>, ApiError> {
        self.client.approve_payroll_entry(id).await
    }

    pub async fn run(&self) -> Result<PayrollRunResult, ApiError> {
        self.client.run_payroll().await
    }
}
