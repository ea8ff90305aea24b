use reqwest::Method;

use super::client::to_body;
use super::{
    ApiClient, ApiError, AttendanceMarkRequest, AttendanceMarkResponse, AttendanceRecord,
    MaybeEnvelope,
};

impl ApiClient {
    pub async fn get_attendance_history(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_data(&format!("/attendance/employee/{}", employee_id))
            .await
    }

    /// Check-in and check-out share one endpoint; the backend tells them apart by state.
    pub async fn mark_attendance(
        &self,
        request: &AttendanceMarkRequest,
    ) -> Result<(AttendanceMarkResponse, Option<String>), ApiError> {
        let envelope = self
            .request_json::<MaybeEnvelope<AttendanceMarkResponse>>(
                Method::POST,
                "/attendance",
                Some(to_body(request)?),
            )
            .await?;
        Ok((envelope.data.unwrap_or_default(), envelope.message))
    }
}
