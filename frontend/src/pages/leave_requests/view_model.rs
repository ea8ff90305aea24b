use super::{
    repository::LeaveRequestsRepository,
    utils::{sort_newest_first, LeaveFormState},
};
use crate::{
    api::{ApiError, CreateLeaveRequest, LeaveRequest},
    state::{
        auth::{current_user_id, use_api_client},
        notify::{use_notifier, Notifier},
        view::{report_mutation, ViewResource},
    },
};
use leptos::*;

pub async fn load_requests(
    repo: &LeaveRequestsRepository,
    employee_id: Option<String>,
) -> Result<Vec<LeaveRequest>, ApiError> {
    let employee_id = employee_id.ok_or_else(ApiError::unauthorized)?;
    let mut requests = repo.list(&employee_id).await?;
    sort_newest_first(&mut requests);
    Ok(requests)
}

#[derive(Clone, Copy)]
pub struct LeaveRequestsViewModel {
    pub form: LeaveFormState,
    pub requests: ViewResource<Vec<LeaveRequest>>,
    pub submit_action: Action<CreateLeaveRequest, Result<Option<String>, ApiError>>,
    pub selected: RwSignal<Option<LeaveRequest>>,
    notifier: Notifier,
}

impl LeaveRequestsViewModel {
    /// Validates locally; nothing is sent while the form is incomplete.
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match self.form.to_payload() {
            Ok(payload) => self.submit_action.dispatch(payload),
            Err(err) => self.notifier.error(err.error),
        }
    }
}

pub fn use_leave_requests_view_model() -> LeaveRequestsViewModel {
    let repo = LeaveRequestsRepository::new(use_api_client());
    let notifier = use_notifier();
    let form = LeaveFormState::default();
    let employee_id = current_user_id();

    let list_repo = repo.clone();
    let requests = ViewResource::on_mount(move || {
        let repo = list_repo.clone();
        let employee_id = employee_id.clone();
        async move { load_requests(&repo, employee_id).await }
    });

    let submit_action = create_action(move |payload: &CreateLeaveRequest| {
        let repo = repo.clone();
        let payload = payload.clone();
        async move { repo.submit(payload).await }
    });

    create_effect(move |_| {
        if report_mutation(
            submit_action.value().get(),
            notifier,
            "Leave request submitted successfully!",
        ) {
            form.reset();
            requests.reload();
        }
    });

    LeaveRequestsViewModel {
        form,
        requests,
        submit_action,
        selected: create_rw_signal(None),
        notifier,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{leave_json, wrap};
    use crate::state::notify::provide_notifier;
    use crate::test_support::helpers::{employee_user, provide_api, provide_auth};
    use crate::test_support::ssr::with_runtime;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn incomplete_form_sends_nothing_and_warns() {
        let server = MockServer::start();
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/leave");
            then.status(201).json_body(json!({ "message": "created" }));
        });

        with_runtime(|| {
            let user = employee_user();
            provide_auth(Some(user.clone()));
            provide_api(&server.url("/api"), &user);
            let notifier = provide_notifier();

            let vm = use_leave_requests_view_model();
            vm.form.leave_type.set("sick".into());
            vm.form.start_date.set("2025-02-01".into());
            vm.form.end_date.set("2025-02-02".into());
            vm.submit();

            assert!(vm.submit_action.value().get_untracked().is_none());
            let toasts = notifier.toasts().get_untracked();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].message, "Please fill all required fields");
        });

        assert_eq!(create.hits(), 0);
    }

    #[tokio::test]
    async fn requests_load_newest_first() {
        let server = MockServer::start_async().await;
        let mut older = leave_json("l1", "approved", "2025-01-05", "2025-01-06");
        older["createdAt"] = json!("2024-12-20T08:00:00.000Z");
        let newer = leave_json("l2", "pending", "2025-02-05", "2025-02-06");
        server.mock(|when, then| {
            when.method(GET).path("/api/leave/employee/u-employee");
            then.status(200).json_body(wrap(json!([older, newer])));
        });

        let runtime = create_runtime();
        let user = employee_user();
        provide_auth(Some(user.clone()));
        provide_api(&server.url("/api"), &user);
        let vm = use_leave_requests_view_model();
        vm.requests.load().await;
        let ids: Vec<String> = vm
            .requests
            .data()
            .get_untracked()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["l2".to_string(), "l1".to_string()]);
        runtime.dispose();
    }
}
