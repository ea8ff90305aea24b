use reqwest::Method;

use super::client::to_body;
use super::{
    ApiClient, ApiError, MaybeEnvelope, PayrollEntry, PayrollRun, PayrollRunResult, PayrollStatus,
    PayrollStatusRequest,
};

impl ApiClient {
    pub async fn list_payroll(&self) -> Result<Vec<PayrollEntry>, ApiError> {
        self.get_data("/payroll").await
    }

    pub async fn list_payroll_history(&self) -> Result<Vec<PayrollRun>, ApiError> {
        self.get_data("/payroll/history").await
    }

    pub async fn approve_payroll_entry(&self, id: &str) -> Result<Option<String>, ApiError> {
        let body = PayrollStatusRequest {
            status: PayrollStatus::Processed,
        };
        self.mutate(Method::PUT, &format!("/payroll/{}", id), Some(to_body(&body)?))
            .await
    }

    pub async fn run_payroll(&self) -> Result<PayrollRunResult, ApiError> {
        self.request_json::<MaybeEnvelope<PayrollRunResult>>(Method::POST, "/payroll/run", None)
            .await
            .map(|envelope| envelope.data.unwrap_or_default())
    }
}
