use super::{
    repository::AttendanceRepository,
    utils::{action_buttons, find_today, sort_history, ActionButtons, MarkKind, TodayStatus},
};
use crate::{
    api::{ApiError, AttendanceRecord},
    state::{
        auth::{current_user_id, use_api_client},
        notify::use_notifier,
        view::{report_mutation, ViewResource},
    },
    utils::time::today_in_app_tz,
};
use chrono::NaiveDate;
use leptos::*;

pub async fn load_history(
    repo: &AttendanceRepository,
    employee_id: Option<String>,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let employee_id = employee_id.ok_or_else(ApiError::unauthorized)?;
    let mut records = repo.history(&employee_id).await?;
    sort_history(&mut records);
    Ok(records)
}

/// Marks attendance, filling in a default message when the server sends none.
pub async fn mark_attendance(
    repo: &AttendanceRepository,
    kind: MarkKind,
) -> Result<Option<String>, ApiError> {
    let message = repo.mark(kind.request()).await?;
    Ok(Some(
        message.unwrap_or_else(|| kind.default_message().to_string()),
    ))
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub history: ViewResource<Vec<AttendanceRecord>>,
    pub mark_action: Action<MarkKind, Result<Option<String>, ApiError>>,
    pub today: NaiveDate,
}

impl AttendanceViewModel {
    pub fn today_record(&self) -> Signal<Option<AttendanceRecord>> {
        let history = self.history.data();
        let today = self.today;
        Signal::derive(move || history.with(|records| find_today(records, today).cloned()))
    }

    pub fn today_status(&self) -> Signal<TodayStatus> {
        let record = self.today_record();
        Signal::derive(move || record.with(|r| TodayStatus::from_record(r.as_ref())))
    }

    pub fn buttons(&self) -> Signal<ActionButtons> {
        let status = self.today_status();
        let pending = self.mark_action.pending();
        Signal::derive(move || action_buttons(status.get(), pending.get()))
    }

    pub fn mark(&self, kind: MarkKind) {
        if self.mark_action.pending().get_untracked() {
            return;
        }
        self.mark_action.dispatch(kind);
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let repo = AttendanceRepository::new(use_api_client());
    let notifier = use_notifier();
    let employee_id = current_user_id();

    let history_repo = repo.clone();
    let history = ViewResource::on_mount(move || {
        let repo = history_repo.clone();
        let employee_id = employee_id.clone();
        async move { load_history(&repo, employee_id).await }
    });

    let mark_action = create_action(move |kind: &MarkKind| {
        let repo = repo.clone();
        let kind = *kind;
        async move { mark_attendance(&repo, kind).await }
    });

    create_effect(move |_| {
        if report_mutation(mark_action.value().get(), notifier, "Attendance updated") {
            history.reload();
        }
    });

    AttendanceViewModel {
        history,
        mark_action,
        today: today_in_app_tz(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{attendance_json, wrap};
    use crate::state::view::ViewPhase;
    use crate::test_support::helpers::{employee_user, provide_api, provide_auth};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn history_loads_sorted_for_signed_in_user() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/attendance/employee/u-employee")
                .header("authorization", "Bearer test-token");
            then.status(200).json_body(wrap(json!([
                attendance_json("2025-01-08", Some("2025-01-08T03:30:00Z"), Some("2025-01-08T12:00:00Z")),
                attendance_json("2025-01-10", Some("2025-01-10T03:30:00Z"), None),
            ])));
        });

        let runtime = create_runtime();
        let user = employee_user();
        provide_auth(Some(user.clone()));
        provide_api(&server.url("/api"), &user);

        let vm = use_attendance_view_model();
        vm.history.load().await;
        assert_eq!(vm.history.phase().get_untracked(), ViewPhase::Ready);
        let records = vm.history.data().get_untracked();
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2025, 1, 10));
        runtime.dispose();
    }

    #[tokio::test]
    async fn history_without_user_is_unauthorized() {
        let runtime = create_runtime();
        provide_auth(None);
        let vm = use_attendance_view_model();
        vm.history.load().await;
        assert_eq!(vm.history.phase().get_untracked(), ViewPhase::Error);
        assert!(vm.history.error().get_untracked().is_some_and(|e| e.is_unauthorized()));
        runtime.dispose();
    }

    #[tokio::test]
    async fn mark_falls_back_to_default_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/attendance")
                .json_body(json!({ "status": "present", "remarks": "Regular check-in" }));
            then.status(201).json_body(json!({ "data": {} }));
        });
        let runtime = create_runtime();
        let api = provide_api(&server.url("/api"), &employee_user());
        let repo = AttendanceRepository::new(api);
        let message = mark_attendance(&repo, MarkKind::CheckIn).await.unwrap();
        assert_eq!(message.as_deref(), Some("Checked in successfully"));
        runtime.dispose();
    }
}
