use super::{components::recent_leave::RecentLeave, view_model::use_dashboard_view_model};
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
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let (auth, _) = use_auth();
    let name = move || {
        auth.with(|state| state.user.as_ref().map(|u| u.name.clone()))
            .unwrap_or_default()
    };
    let data = vm.data.data();
    let loading = vm.data.loading();

    let status = Signal::derive(move || {
        if loading.get() {
            "Loading...".to_string()
        } else {
            data.with(|d| d.status().dashboard_label().to_string())
        }
    });
    let recent = Signal::derive(move || data.with(|d| d.recent_leave.clone()));

    view! {
        <div class="space-y-6">
            <PageHeader
                title=format!("Welcome, {}!", name())
                subtitle="Here's an overview of your workplace activities and tools."
            />
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                <StatCard title="Today's Status" value=status />
                <StatCard
                    title="Check In"
                    value=Signal::derive(move || data.with(|d| d.check_in_note()))
                />
            </div>
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                <QuickLinks
                    title="Quick Actions"
                    links=vec![
                        (paths::ATTENDANCE, "Mark Attendance"),
                        (paths::LEAVE_REQUESTS, "Request Leave"),
                        (paths::JOB_ROLES, "Browse Job Roles"),
                        (paths::DEPARTMENT_WORK, "Department Work"),
                    ]
                />
                <RecentLeave requests=recent />
            </div>
        </div>
    }
}
