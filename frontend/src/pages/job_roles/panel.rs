use super::{
    components::{applications::MyApplications, apply_dialog::ApplyDialog, job_list::JobList},
    view_model::use_job_roles_view_model,
};
use crate::components::{forms::SearchInput, layout::PageHeader};
use leptos::*;

#[component]
pub fn JobRolesPanel() -> impl IntoView {
    let vm = use_job_roles_view_model();
    let board = vm.board.data();
    let applied = Callback::new(move |job_id: String| board.with_untracked(|b| b.has_applied(&job_id)));
    let applications = Signal::derive(move || board.with(|b| b.applications.clone()));

    view! {
        <div class="space-y-6">
            <PageHeader title="Internal Job Opportunities" subtitle="Explore open roles across the company" />
            <div class="grid gap-6 lg:grid-cols-3">
                <section class="lg:col-span-2 bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                    <SearchInput value=vm.search placeholder="Search jobs..." />
                    <JobList
                        jobs=vm.filtered_jobs()
                        loading=vm.board.loading()
                        applied=applied
                        on_open=Callback::new(move |job| vm.open(job))
                    />
                </section>
                <MyApplications applications=applications />
            </div>
            <ApplyDialog
                selected=vm.selected
                cover_letter=vm.cover_letter
                pending=vm.apply_action.pending()
                on_apply=Callback::new(move |_| vm.apply())
                on_close=Callback::new(move |_| vm.close())
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee_user, helpers::provide_auth, ssr::render_to_string};

    #[test]
    fn panel_renders_search_and_applications() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            view! { <JobRolesPanel /> }
        });
        assert!(html.contains("Internal Job Opportunities"));
        assert!(html.contains("Search jobs..."));
        assert!(html.contains("My Applications"));
    }
}
