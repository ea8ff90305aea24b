use super::{
    repository::LeaveManagementRepository,
    utils::{approval, department_options, filter_requests, rejection, LeaveFilters, LeaveStats},
};
use crate::{
    api::{ApiError, LeaveDecisionRequest, LeaveRequest, LeaveStatus},
    pages::leave_requests::utils::sort_newest_first,
    state::{
        auth::{use_api_client, use_auth},
        notify::{use_notifier, Notifier},
        view::{report_mutation, ViewResource},
    },
    utils::time::today_in_app_tz,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveDecision {
    pub id: String,
    pub decision: LeaveDecisionRequest,
}

pub async fn load_requests(repo: &LeaveManagementRepository) -> Result<Vec<LeaveRequest>, ApiError> {
    let mut requests = repo.list().await?;
    sort_newest_first(&mut requests);
    Ok(requests)
}

pub async fn run_decision(
    repo: &LeaveManagementRepository,
    decision: LeaveDecision,
) -> Result<Option<String>, ApiError> {
    let fallback = match decision.decision.status {
        LeaveStatus::Rejected => "Leave request rejected successfully!",
        _ => "Leave request approved successfully!",
    };
    repo.decide(&decision.id, decision.decision)
        .await
        .map(|message| Some(message.unwrap_or_else(|| fallback.to_string())))
}

#[derive(Clone, Copy)]
pub struct LeaveManagementViewModel {
    pub requests: ViewResource<Vec<LeaveRequest>>,
    pub search: RwSignal<String>,
    pub department: RwSignal<String>,
    pub status: RwSignal<String>,
    pub selected: RwSignal<Option<LeaveRequest>>,
    pub rejecting: RwSignal<Option<LeaveRequest>>,
    pub rejection_reason: RwSignal<String>,
    pub decide_action: Action<LeaveDecision, Result<Option<String>, ApiError>>,
    reviewer: Signal<String>,
    notifier: Notifier,
}

impl LeaveManagementViewModel {
    pub fn stats(&self) -> Signal<LeaveStats> {
        let requests = self.requests.data();
        Signal::derive(move || requests.with(|r| LeaveStats::compute(r, today_in_app_tz())))
    }

    pub fn filtered(&self) -> Signal<Vec<LeaveRequest>> {
        let requests = self.requests.data();
        let (search, department, status) = (self.search, self.department, self.status);
        Signal::derive(move || {
            let filters = LeaveFilters {
                query: search.get(),
                department: department.get(),
                status: status.get(),
            };
            requests.with(|r| filter_requests(r, &filters))
        })
    }

    pub fn departments(&self) -> Signal<Vec<String>> {
        let requests = self.requests.data();
        Signal::derive(move || requests.with(|r| department_options(r)))
    }

    pub fn approve(&self, request: &LeaveRequest) {
        if self.decide_action.pending().get_untracked() {
            return;
        }
        self.decide_action.dispatch(LeaveDecision {
            id: request.id.clone(),
            decision: approval(&self.reviewer.get_untracked()),
        });
    }

    pub fn start_reject(&self, request: LeaveRequest) {
        self.rejection_reason.set(String::new());
        self.rejecting.set(Some(request));
    }

    pub fn cancel_reject(&self) {
        self.rejecting.set(None);
    }

    pub fn confirm_reject(&self) {
        if self.decide_action.pending().get_untracked() {
            return;
        }
        let Some(request) = self.rejecting.get_untracked() else {
            return;
        };
        match rejection(
            &self.reviewer.get_untracked(),
            &self.rejection_reason.get_untracked(),
        ) {
            Ok(decision) => self.decide_action.dispatch(LeaveDecision {
                id: request.id,
                decision,
            }),
            Err(err) => self.notifier.error(err.error),
        }
    }
}

pub fn use_leave_management_view_model() -> LeaveManagementViewModel {
    let repo = LeaveManagementRepository::new(use_api_client());
    let notifier = use_notifier();
    let (auth, _) = use_auth();
    let reviewer = Signal::derive(move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "HR Admin".to_string())
        })
    });

    let list_repo = repo.clone();
    let requests = ViewResource::on_mount(move || {
        let repo = list_repo.clone();
        async move { load_requests(&repo).await }
    });

    let decide_action = create_action(move |decision: &LeaveDecision| {
        let repo = repo.clone();
        let decision = decision.clone();
        async move { run_decision(&repo, decision).await }
    });

    let selected = create_rw_signal(None::<LeaveRequest>);
    let rejecting = create_rw_signal(None::<LeaveRequest>);
    create_effect(move |_| {
        if report_mutation(decide_action.value().get(), notifier, "Leave request updated") {
            selected.set(None);
            rejecting.set(None);
            requests.reload();
        }
    });

    LeaveManagementViewModel {
        requests,
        search: create_rw_signal(String::new()),
        department: create_rw_signal(String::new()),
        status: create_rw_signal(String::new()),
        selected,
        rejecting,
        rejection_reason: create_rw_signal(String::new()),
        decide_action,
        reviewer,
        notifier,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{leave_json, wrap};
    use crate::state::notify::provide_notifier;
    use crate::test_support::helpers::{hr_user, provide_api, provide_auth};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn list_loads_and_filters_by_status() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/leave");
            then.status(200).json_body(wrap(json!([
                leave_json("l1", "pending", "2025-01-14", "2025-01-15"),
                leave_json("l2", "rejected", "2025-01-10", "2025-01-12")
            ])));
        });
        let runtime = create_runtime();
        let user = hr_user();
        provide_auth(Some(user.clone()));
        provide_api(&server.url("/api"), &user);
        let vm = use_leave_management_view_model();
        vm.requests.load().await;

        assert_eq!(vm.filtered().get_untracked().len(), 2);
        assert_eq!(vm.stats().get_untracked().pending, 1);
        assert_eq!(vm.departments().get_untracked(), vec!["Engineering"]);
        vm.status.set("rejected".into());
        assert_eq!(vm.filtered().get_untracked()[0].id, "l2");
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejection_is_sent_with_reason_and_reviewer() {
        let server = MockServer::start_async().await;
        let put = server.mock(|when, then| {
            when.method(PUT).path("/api/leave/l1").json_body(json!({
                "status": "rejected",
                "rejectedBy": "Hema Rao",
                "rejectionReason": "Release week"
            }));
            then.status(200).json_body(json!({ "data": {} }));
        });
        let runtime = create_runtime();
        let api = provide_api(&server.url("/api"), &hr_user());
        let repo = LeaveManagementRepository::new(api);
        let message = run_decision(
            &repo,
            LeaveDecision {
                id: "l1".into(),
                decision: rejection("Hema Rao", "Release week").unwrap(),
            },
        )
        .await
        .unwrap();
        assert_eq!(message.as_deref(), Some("Leave request rejected successfully!"));
        put.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn approval_prefers_server_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/leave/l1");
            then.status(200)
                .json_body(json!({ "message": "Leave approved", "data": {} }));
        });
        let runtime = create_runtime();
        let api = provide_api(&server.url("/api"), &hr_user());
        let repo = LeaveManagementRepository::new(api);
        let message = run_decision(
            &repo,
            LeaveDecision {
                id: "l1".into(),
                decision: approval("Hema Rao"),
            },
        )
        .await
        .unwrap();
        assert_eq!(message.as_deref(), Some("Leave approved"));
        runtime.dispose();
    }

    #[test]
    fn blank_rejection_reason_is_not_sent() {
        crate::test_support::ssr::with_runtime(|| {
            provide_auth(Some(hr_user()));
            let notifier = provide_notifier();
            let vm = use_leave_management_view_model();
            vm.start_reject(
                serde_json::from_value(leave_json("l1", "pending", "2025-01-14", "2025-01-15"))
                    .unwrap(),
            );
            vm.confirm_reject();
            assert!(vm.decide_action.value().get_untracked().is_none());
            assert!(vm.rejecting.get_untracked().is_some());
            assert_eq!(
                notifier.toasts().get_untracked()[0].message,
                "Please provide a reason for rejection"
            );
        });
    }
}
