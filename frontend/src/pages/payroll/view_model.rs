use super::{
    repository::PayrollRepository,
    utils::{
        build_payroll_csv, department_options, filter_entries, report_filename, PayrollFilters,
        PayrollStats,
    },
};
use crate::{
    api::{ApiError, PayrollEntry, PayrollRun},
    state::{
        auth::use_api_client,
        notify::{use_notifier, Notifier},
        view::{report_mutation, ViewResource},
    },
    utils::{time::today_in_app_tz, trigger_csv_download},
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayrollMutation {
    Approve { entry_id: String },
    RunPending,
}

pub async fn run_mutation(
    repo: &PayrollRepository,
    mutation: PayrollMutation,
) -> Result<Option<String>, ApiError> {
    match mutation {
        PayrollMutation::Approve { entry_id } => repo
            .approve(&entry_id)
            .await
            .map(|message| Some(message.unwrap_or_else(|| "Payroll entry approved!".to_string()))),
        PayrollMutation::RunPending => {
            let result = repo.run().await?;
            Ok(Some(format!(
                "Payroll processed successfully! {} {} processed.",
                result.processed,
                if result.processed == 1 { "entry" } else { "entries" }
            )))
        }
    }
}

#[derive(Clone, Copy)]
pub struct PayrollViewModel {
    pub entries: ViewResource<Vec<PayrollEntry>>,
    pub history: ViewResource<Vec<PayrollRun>>,
    pub search: RwSignal<String>,
    pub department: RwSignal<String>,
    pub status: RwSignal<String>,
    pub mutation: Action<PayrollMutation, Result<Option<String>, ApiError>>,
    notifier: Notifier,
}

impl PayrollViewModel {
    pub fn stats(&self) -> Signal<PayrollStats> {
        let entries = self.entries.data();
        Signal::derive(move || entries.with(|e| PayrollStats::compute(e)))
    }

    pub fn filtered(&self) -> Signal<Vec<PayrollEntry>> {
        let entries = self.entries.data();
        let (search, department, status) = (self.search, self.department, self.status);
        Signal::derive(move || {
            let filters = PayrollFilters {
                query: search.get(),
                department: department.get(),
                status: status.get(),
            };
            entries.with(|e| filter_entries(e, &filters))
        })
    }

    pub fn departments(&self) -> Signal<Vec<String>> {
        let entries = self.entries.data();
        Signal::derive(move || entries.with(|e| department_options(e)))
    }

    pub fn approve(&self, entry_id: String) {
        if self.mutation.pending().get_untracked() {
            return;
        }
        self.mutation.dispatch(PayrollMutation::Approve { entry_id });
    }

    pub fn run_payroll(&self) {
        if self.mutation.pending().get_untracked() {
            return;
        }
        if self.stats().get_untracked().pending == 0 {
            self.notifier.info("There are no pending payroll entries to process");
            return;
        }
        self.mutation.dispatch(PayrollMutation::RunPending);
    }

    /// Downloads the currently filtered entries as CSV.
    pub fn export(&self) {
        let entries = self.filtered().get_untracked();
        if entries.is_empty() {
            self.notifier.info("No payroll entries match the current filters");
            return;
        }
        let result = build_payroll_csv(&entries)
            .and_then(|csv| trigger_csv_download(&report_filename(today_in_app_tz()), &csv));
        match result {
            Ok(()) => self.notifier.success("Payroll report downloaded"),
            Err(err) => {
                log::error!("payroll export failed: {}", err);
                self.notifier.error(err.error);
            }
        }
    }
}

pub fn use_payroll_view_model() -> PayrollViewModel {
    let repo = PayrollRepository::new(use_api_client());
    let notifier = use_notifier();

    let entries_repo = repo.clone();
    let entries = ViewResource::on_mount(move || {
        let repo = entries_repo.clone();
        async move { repo.entries().await }
    });
    let history_repo = repo.clone();
    let history = ViewResource::on_mount(move || {
        let repo = history_repo.clone();
        async move { repo.history().await }
    });

    let mutation = create_action(move |mutation: &PayrollMutation| {
        let repo = repo.clone();
        let mutation = mutation.clone();
        async move { run_mutation(&repo, mutation).await }
    });

    create_effect(move |_| {
        if report_mutation(mutation.value().get(), notifier, "Payroll updated") {
            entries.reload();
            history.reload();
        }
    });

    PayrollViewModel {
        entries,
        history,
        search: create_rw_signal(String::new()),
        department: create_rw_signal(String::new()),
        status: create_rw_signal(String::new()),
        mutation,
        notifier,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{payroll_json, wrap};
    use crate::state::notify::provide_notifier;
    use crate::test_support::helpers::{hr_user, provide_api, provide_auth};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn entries_and_history_load() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/payroll");
            then.status(200).json_body(wrap(json!([
                payroll_json("p1", "Ravi Menon", "Processed", 5200.0),
                payroll_json("p2", "Omar Ali", "Pending", 4800.0)
            ])));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/payroll/history");
            then.status(200).json_body(wrap(json!([{
                "month": "December 2024",
                "totalAmount": 10000,
                "employeeCount": 2,
                "status": "Completed",
                "processedDate": "2024-12-31"
            }])));
        });
        let runtime = create_runtime();
        let user = hr_user();
        provide_auth(Some(user.clone()));
        provide_api(&server.url("/api"), &user);
        let vm = use_payroll_view_model();
        vm.entries.load().await;
        vm.history.load().await;

        assert_eq!(vm.stats().get_untracked().processed_label(), "1/2");
        assert_eq!(vm.history.data().get_untracked()[0].month, "December 2024");
        vm.status.set("Pending".into());
        assert_eq!(vm.filtered().get_untracked()[0].id, "p2");
        runtime.dispose();
    }

    #[tokio::test]
    async fn approve_puts_processed_status() {
        let server = MockServer::start_async().await;
        let put = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/payroll/p2")
                .json_body(json!({ "status": "Processed" }));
            then.status(200).json_body(json!({ "data": {} }));
        });
        let runtime = create_runtime();
        let api = provide_api(&server.url("/api"), &hr_user());
        let repo = PayrollRepository::new(api);
        let message = run_mutation(&repo, PayrollMutation::Approve { entry_id: "p2".into() })
            .await
            .unwrap();
        assert_eq!(message.as_deref(), Some("Payroll entry approved!"));
        put.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn run_reports_processed_count() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/payroll/run");
            then.status(200).json_body(wrap(json!({ "processed": 3 })));
        });
        let runtime = create_runtime();
        let api = provide_api(&server.url("/api"), &hr_user());
        let repo = PayrollRepository::new(api);
        let message = run_mutation(&repo, PayrollMutation::RunPending).await.unwrap();
        assert_eq!(
            message.as_deref(),
            Some("Payroll processed successfully! 3 entries processed.")
        );
        runtime.dispose();
    }

    #[test]
    fn run_without_pending_entries_is_skipped() {
        crate::test_support::ssr::with_runtime(|| {
            provide_auth(Some(hr_user()));
            let notifier = provide_notifier();
            let vm = use_payroll_view_model();
            vm.run_payroll();
            assert!(vm.mutation.value().get_untracked().is_none());
            assert_eq!(
                notifier.toasts().get_untracked()[0].message,
                "There are no pending payroll entries to process"
            );
        });
    }

    #[test]
    fn export_with_no_rows_only_notifies() {
        crate::test_support::ssr::with_runtime(|| {
            provide_auth(Some(hr_user()));
            let notifier = provide_notifier();
            let vm = use_payroll_view_model();
            vm.export();
            assert_eq!(
                notifier.toasts().get_untracked()[0].message,
                "No payroll entries match the current filters"
            );
        });
    }
}
