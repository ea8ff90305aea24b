use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::router::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Hr,
    Employee,
}

impl Role {
    pub fn home(&self) -> &'static str {
        match self {
            Role::Hr => paths::HR_HOME,
            Role::Employee => paths::EMPLOYEE_HOME,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Hr => "HR Admin",
            Role::Employee => "Employee",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hr => "hr",
            Role::Employee => "employee",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "hr" => Some(Role::Hr),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

/// Profile returned by `GET /employees/me` and persisted under `hrms_user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Standard `{ data, message?, error? }` wrapper used by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope for mutations whose `data` may be absent or null.
#[derive(Debug, Clone, Deserialize)]
pub struct MaybeEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub department_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub department_id: Option<String>,
    pub department_name: String,
    #[serde(default)]
    pub manager_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "wire_date::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Employee {
    pub fn department_id(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.id.as_str())
    }

    pub fn department_name(&self) -> &str {
        self.department
            .as_ref()
            .map(|d| d.department_name.as_str())
            .unwrap_or("Unassigned")
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Active")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    pub salary: f64,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub address: String,
    pub salary: f64,
    pub role: Role,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "wire_date::optional_timestamp")]
    pub check_in_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire_date::optional_timestamp")]
    pub check_out_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceMarkRequest {
    pub status: String,
    pub remarks: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMarkResponse {
    #[serde(default, deserialize_with = "wire_date::optional_timestamp")]
    pub check_in_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire_date::optional_timestamp")]
    pub check_out_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl LeaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Unknown => "Unknown",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Unknown => "unknown",
        }
    }
}

/// Department as it appears on populated leave employees: either an object or a bare name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DepartmentField {
    Ref(DepartmentRef),
    Name(String),
}

impl DepartmentField {
    pub fn label(&self) -> &str {
        match self {
            DepartmentField::Ref(dept) => &dept.department_name,
            DepartmentField::Name(name) => name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: Option<DepartmentField>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LeaveEmployee {
    Populated(EmployeeSummary),
    Id(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "employeeId", default)]
    pub employee: Option<LeaveEmployee>,
    #[serde(alias = "type", default)]
    pub leave_type: String,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub reason: String,
    pub status: LeaveStatus,
    #[serde(alias = "appliedOn", default, deserialize_with = "wire_date::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default, deserialize_with = "wire_date::optional_timestamp")]
    pub approved_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejected_by: Option<String>,
    #[serde(default, deserialize_with = "wire_date::optional_timestamp")]
    pub rejected_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl LeaveRequest {
    pub fn employee_summary(&self) -> Option<&EmployeeSummary> {
        match &self.employee {
            Some(LeaveEmployee::Populated(summary)) => Some(summary),
            _ => None,
        }
    }

    pub fn employee_name(&self) -> &str {
        self.employee_summary()
            .map(|e| e.name.as_str())
            .unwrap_or("Unknown employee")
    }

    pub fn department_label(&self) -> &str {
        self.employee_summary()
            .and_then(|e| e.department.as_ref())
            .map(DepartmentField::label)
            .unwrap_or("")
    }

    /// Inclusive day count, preferring the server-provided duration.
    pub fn days(&self) -> Option<i64> {
        if let Some(duration) = self.duration {
            return Some(duration.round() as i64);
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days() + 1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDecisionRequest {
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub posted_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub applicants: u32,
    #[serde(default = "default_job_status")]
    pub status: String,
}

fn default_job_status() -> String {
    "Active".to_string()
}

impl JobPosting {
    pub fn is_open(&self) -> bool {
        !self.status.eq_ignore_ascii_case("closed")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub deadline: NaiveDate,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    New,
    #[serde(rename = "In Review")]
    InReview,
    Interview,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl ApplicationStatus {
    pub const FILTERABLE: [ApplicationStatus; 5] = [
        ApplicationStatus::New,
        ApplicationStatus::InReview,
        ApplicationStatus::Interview,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "New",
            ApplicationStatus::InReview => "In Review",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Unknown => "Unknown",
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub apply_date: Option<NaiveDate>,
    #[serde(default)]
    pub experience: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub interview_date: Option<NaiveDate>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub job_id: String,
    pub cover_letter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDecisionRequest {
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentTask {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub assigned_by: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub completed_date: Option<NaiveDate>,
}

impl DepartmentTask {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskUpdateRequest {
    pub comment: String,
    pub progress: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskStatusRequest {
    pub status: TaskStatus,
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayrollStatus {
    Pending,
    Processed,
    #[serde(other)]
    Unknown,
}

impl PayrollStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PayrollStatus::Pending => "Pending",
            PayrollStatus::Processed => "Processed",
            PayrollStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub employee_name: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub base_salary: f64,
    #[serde(default)]
    pub bonus: f64,
    #[serde(default)]
    pub deductions: f64,
    #[serde(default)]
    pub net_salary: f64,
    pub status: PayrollStatus,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub bank_account: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRun {
    pub month: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub employee_count: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "wire_date::optional_date")]
    pub processed_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayrollRunResult {
    #[serde(default)]
    pub processed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayrollStatusRequest {
    pub status: PayrollStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    Unauthorized,
    Validation,
    Request,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            error: "Your session has expired. Please sign in again.".to_string(),
            code: "UNAUTHORIZED".to_string(),
            details: None,
        }
    }

    pub fn invalid_credentials(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "INVALID_CREDENTIALS".to_string(),
            details: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code.as_str() {
            "UNAUTHORIZED" => ErrorKind::Unauthorized,
            "INVALID_CREDENTIALS" => ErrorKind::Authentication,
            "VALIDATION_ERROR" => ErrorKind::Validation,
            _ => ErrorKind::Request,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }
}

/// Lenient date decoding for fields that arrive as `YYYY-MM-DD` or full timestamps.
/// Timestamps resolve to their calendar day in the app time zone.
pub(crate) mod wire_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use chrono_tz::Tz;
    use serde::{Deserialize, Deserializer};

    use crate::{config, utils::time::to_zone};

    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        parse_date_in(raw, config::current_time_zone())
    }

    pub fn parse_date_in(raw: &str, zone: Option<Tz>) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        if let Some(instant) = parse_timestamp(trimmed) {
            return Some(to_zone(instant, zone).date_naive());
        }
        let head = trimmed.get(..10).unwrap_or(trimmed);
        NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
    }

    pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_date))
    }

    pub fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());
        assert_eq!(validation.kind(), ErrorKind::Validation);

        assert_eq!(ApiError::unknown("boom").kind(), ErrorKind::Request);
        assert_eq!(
            ApiError::request_failed("network error").code,
            "REQUEST_FAILED"
        );
        assert!(ApiError::unauthorized().is_unauthorized());
        assert_eq!(
            ApiError::invalid_credentials("Login failed").kind(),
            ErrorKind::Authentication
        );
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn role_round_trips_lowercase_and_maps_home() {
        let role: Role = serde_json::from_value(json!("hr")).unwrap();
        assert_eq!(role, Role::Hr);
        assert_eq!(serde_json::to_value(Role::Employee).unwrap(), json!("employee"));
        assert_eq!(Role::Hr.home(), "/hr-dashboard");
        assert_eq!(Role::Employee.home(), "/dashboard");
        assert_eq!(Role::parse(" HR "), Some(Role::Hr));
        assert_eq!(Role::parse("manager"), None);
    }

    #[test]
    fn user_profile_uses_mongo_id_field() {
        let profile: UserProfile = serde_json::from_value(json!({
            "_id": "u1",
            "name": "Asha",
            "email": "asha@example.com",
            "role": "employee"
        }))
        .unwrap();
        assert_eq!(profile.id, "u1");
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["_id"], "u1");
    }

    #[test]
    fn wire_dates_accept_plain_dates_and_timestamps() {
        assert_eq!(
            wire_date::parse_date_in("2025-03-04T10:00:00.000Z", Some(chrono_tz::UTC)),
            NaiveDate::from_ymd_opt(2025, 3, 4)
        );
        assert_eq!(
            wire_date::parse_date("2025-03-04"),
            NaiveDate::from_ymd_opt(2025, 3, 4)
        );
        assert_eq!(wire_date::parse_date("soon"), None);
        assert!(wire_date::parse_timestamp("2025-03-04T10:00:00Z").is_some());
        assert!(wire_date::parse_timestamp("2025-03-04").is_none());
    }

    #[test]
    fn timestamp_dates_use_the_local_calendar_day() {
        let raw = "2025-01-09T18:30:00.000Z";
        assert_eq!(
            wire_date::parse_date_in(raw, Some(chrono_tz::Asia::Kolkata)),
            NaiveDate::from_ymd_opt(2025, 1, 10)
        );
        assert_eq!(
            wire_date::parse_date_in(raw, Some(chrono_tz::America::New_York)),
            NaiveDate::from_ymd_opt(2025, 1, 9)
        );
        assert_eq!(
            wire_date::parse_date_in("2025-01-09", Some(chrono_tz::Asia::Kolkata)),
            NaiveDate::from_ymd_opt(2025, 1, 9)
        );
    }

    #[test]
    fn leave_request_accepts_populated_employee_and_aliases() {
        let leave: LeaveRequest = serde_json::from_value(json!({
            "_id": "l1",
            "employeeId": {
                "_id": "e1",
                "name": "Ravi",
                "email": "ravi@example.com",
                "department": "Engineering",
                "employeeId": "EMP001"
            },
            "type": "Sick Leave",
            "startDate": "2025-01-10T12:00:00.000Z",
            "endDate": "2025-01-12",
            "reason": "Flu",
            "status": "pending",
            "appliedOn": "2025-01-09T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(leave.leave_type, "Sick Leave");
        assert_eq!(leave.employee_name(), "Ravi");
        assert_eq!(leave.department_label(), "Engineering");
        assert_eq!(leave.days(), Some(3));
        assert!(leave.created_at.is_some());
    }

    #[test]
    fn leave_request_accepts_plain_employee_id_and_unknown_status() {
        let leave: LeaveRequest = serde_json::from_value(json!({
            "_id": "l2",
            "employeeId": "e1",
            "leaveType": "Annual Leave",
            "status": "archived"
        }))
        .unwrap();
        assert_eq!(leave.employee, Some(LeaveEmployee::Id("e1".into())));
        assert_eq!(leave.status, LeaveStatus::Unknown);
        assert_eq!(leave.employee_name(), "Unknown employee");
    }

    #[test]
    fn application_status_uses_display_names_on_the_wire() {
        let status: ApplicationStatus = serde_json::from_value(json!("In Review")).unwrap();
        assert_eq!(status, ApplicationStatus::InReview);
        assert_eq!(
            serde_json::to_value(ApplicationStatus::Interview).unwrap(),
            json!("Interview")
        );
    }

    #[test]
    fn leave_decision_omits_unused_fields() {
        let body = serde_json::to_value(LeaveDecisionRequest {
            status: LeaveStatus::Approved,
            approved_by: Some("Hema".into()),
            rejected_by: None,
            rejection_reason: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "status": "approved", "approvedBy": "Hema" }));
    }
}
