use super::{
    components::{departments::DepartmentSummary, recent_applications::RecentApplications},
    view_model::use_hr_dashboard_view_model,
};
use crate::{
    components::{
        cards::{QuickLinks, StatCard},
        layout::PageHeader,
    },
    router::paths,
    state::auth::use_auth,
};
use leptos::*;

#[component]
pub fn HrDashboardPanel() -> impl IntoView {
    let vm = use_hr_dashboard_view_model();
    let (auth, _) = use_auth();
    let name = auth
        .with_untracked(|state| state.user.as_ref().map(|u| u.name.clone()))
        .unwrap_or_default();
    let overview = vm.overview.data();
    let loading = vm.overview.loading();
    let stat = move |pick: fn(&super::utils::HrStats) -> usize| {
        Signal::derive(move || {
            if loading.get() {
                "...".to_string()
            } else {
                overview.with(|o| pick(&o.stats).to_string())
            }
        })
    };

    view! {
        <div class="space-y-6">
            <PageHeader
                title=format!("Welcome, {}!", name)
                subtitle="Here's what is happening across the organisation today."
            />
            <dl class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                <StatCard title="Total Employees" value=stat(|s| s.total_employees) />
                <StatCard title="Open Positions" value=stat(|s| s.open_positions) />
                <StatCard title="Leave Requests" value=stat(|s| s.pending_leave) hint="Pending approval" />
                <StatCard title="Absent Today" value=stat(|s| s.absent_today) hint="On approved leave" />
            </dl>
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                <QuickLinks
                    title="Quick Actions"
                    links=vec![
                        (paths::EMPLOYEES, "Manage Employees"),
                        (paths::RECRUITMENT, "Recruitment"),
                        (paths::LEAVE_MANAGEMENT, "Review Leave"),
                        (paths::PAYROLL, "Process Payroll"),
                    ]
                />
                <RecentApplications applications=Signal::derive(move || overview.with(|o| o.recent_applications.clone())) />
                <DepartmentSummary departments=Signal::derive(move || overview.with(|o| o.departments.clone())) />
            </div>
        </div>
    }
}
