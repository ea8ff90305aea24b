use super::{
    components::{
        application_dialog::ApplicationDialog, applications::ApplicationTable,
        job_form::JobFormDialog, postings::JobPostings,
    },
    view_model::{use_recruitment_view_model, RecruitmentTab},
};
use crate::{
    api::ApplicationStatus,
    components::{
        forms::{SearchInput, SelectField},
        layout::{ErrorMessage, PageHeader},
    },
};
use leptos::*;

const TAB: &str = "px-4 py-2 text-sm font-medium rounded-md";
const TAB_ACTIVE: &str = "bg-surface-elevated text-fg shadow";
const TAB_IDLE: &str = "text-fg-muted hover:text-fg";

#[component]
pub fn RecruitmentPanel() -> impl IntoView {
    let vm = use_recruitment_view_model();
    let pending = vm.mutation.pending();
    let statuses = Signal::derive(|| {
        let mut options = vec![(String::new(), "All Statuses".to_string())];
        options.extend(
            ApplicationStatus::FILTERABLE
                .iter()
                .map(|s| (s.label().to_string(), s.label().to_string())),
        );
        options
    });
    let tab_class = move |tab: RecruitmentTab| {
        move || format!("{} {}", TAB, if vm.tab.get() == tab { TAB_ACTIVE } else { TAB_IDLE })
    };

    view! {
        <div class="space-y-6">
            <PageHeader title="Recruitment Panel" subtitle="Manage job applications and postings." />
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <div class="inline-flex gap-1 rounded-lg bg-surface-muted p-1" role="tablist">
                        <button
                            type="button"
                            role="tab"
                            class=tab_class(RecruitmentTab::Applications)
                            on:click=move |_| vm.tab.set(RecruitmentTab::Applications)
                        >
                            "Applications"
                        </button>
                        <button
                            type="button"
                            role="tab"
                            class=tab_class(RecruitmentTab::Postings)
                            on:click=move |_| vm.tab.set(RecruitmentTab::Postings)
                        >
                            "Job Postings"
                        </button>
                    </div>
                    <Show when=move || vm.tab.get() == RecruitmentTab::Postings>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| vm.open_job_form()
                        >
                            "New Job Posting"
                        </button>
                    </Show>
                </div>
                {move || {
                    vm.data
                        .error()
                        .get()
                        .map(|err| view! { <ErrorMessage message=err.error /> })
                }}
                <Show
                    when=move || vm.tab.get() == RecruitmentTab::Applications
                    fallback=move || view! { <JobPostings jobs=vm.jobs() loading=vm.data.loading() /> }
                >
                    <div class="flex flex-wrap gap-3 items-end">
                        <SearchInput value=vm.search placeholder="Search applications..." />
                        <div class="w-48">
                            <SelectField label="Status" value=vm.status options=statuses />
                        </div>
                    </div>
                    <ApplicationTable
                        applications=vm.filtered_applications()
                        loading=vm.data.loading()
                        on_view=Callback::new(move |app| vm.open(app))
                    />
                </Show>
            </section>
            <ApplicationDialog
                selected=vm.selected
                rejection_reason=vm.rejection_reason
                interview_date=vm.interview_date
                pending=pending
                on_accept=Callback::new(move |_| vm.accept())
                on_reject=Callback::new(move |_| vm.reject())
                on_interview=Callback::new(move |_| vm.schedule_interview())
                on_close=Callback::new(move |_| vm.close())
            />
            <JobFormDialog
                form=vm.job_form
                is_open=vm.job_dialog_open
                departments=vm.department_options()
                pending=pending
                on_submit=Callback::new(move |_| vm.create_job())
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{hr_user, provide_auth},
        ssr::render_to_string,
    };

    #[test]
    fn applications_tab_is_default() {
        let html = render_to_string(move || {
            provide_auth(Some(hr_user()));
            view! { <RecruitmentPanel /> }
        });
        assert!(html.contains("Recruitment Panel"));
        assert!(html.contains("Search applications..."));
        assert!(html.contains("All Statuses"));
        assert!(!html.contains("New Job Posting"));
    }
}
