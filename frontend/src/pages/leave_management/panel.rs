use super::{
    components::{reject_dialog::RejectDialog, review_dialog::ReviewDialog, table::LeaveRequestTable},
    view_model::use_leave_management_view_model,
};
use crate::{
    api::LeaveStatus,
    components::{
        cards::StatCard,
        forms::{SearchInput, SelectFilter, SelectField},
        layout::{ErrorMessage, PageHeader},
    },
};
use leptos::*;

#[component]
pub fn LeaveManagementPanel() -> impl IntoView {
    let vm = use_leave_management_view_model();
    let stats = vm.stats();
    let statuses = Signal::derive(|| {
        let mut options = vec![(String::new(), "All Statuses".to_string())];
        options.extend(
            [LeaveStatus::Pending, LeaveStatus::Approved, LeaveStatus::Rejected]
                .iter()
                .map(|s| (s.as_str().to_string(), s.label().to_string())),
        );
        options
    });
    let pending = vm.decide_action.pending();

    view! {
        <div class="space-y-6">
            <PageHeader title="Leave Management" subtitle="Review and process employee leave requests." />
            <div class="grid gap-6 md:grid-cols-3">
                <StatCard
                    title="Pending Requests"
                    value=Signal::derive(move || stats.get().pending.to_string())
                    hint="Requests awaiting your review"
                />
                <StatCard
                    title="Today's Absences"
                    value=Signal::derive(move || stats.get().absent_today.to_string())
                    hint="Employees on leave today"
                />
                <StatCard
                    title="This Month"
                    value=Signal::derive(move || stats.get().this_month.to_string())
                    hint="Leave requests this month"
                />
            </div>
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <div class="flex flex-wrap gap-3 items-end">
                    <SearchInput value=vm.search placeholder="Search employees..." />
                    <div class="w-48">
                        <SelectFilter value=vm.department label="Departments" options=vm.departments() />
                    </div>
                    <div class="w-48">
                        <SelectField label="Status" value=vm.status options=statuses />
                    </div>
                </div>
                {move || {
                    vm.requests
                        .error()
                        .get()
                        .map(|err| view! { <ErrorMessage message=err.error /> })
                }}
                <LeaveRequestTable
                    requests=vm.filtered()
                    loading=vm.requests.loading()
                    pending=pending
                    on_view=Callback::new(move |request| vm.selected.set(Some(request)))
                    on_approve=Callback::new(move |request| vm.approve(&request))
                    on_reject=Callback::new(move |request| vm.start_reject(request))
                />
            </section>
            <ReviewDialog
                selected=vm.selected
                pending=pending
                on_approve=Callback::new(move |request| vm.approve(&request))
                on_reject=Callback::new(move |request| {
                    vm.selected.set(None);
                    vm.start_reject(request);
                })
            />
            <RejectDialog
                rejecting=vm.rejecting
                reason=vm.rejection_reason
                pending=pending
                on_confirm=Callback::new(move |_| vm.confirm_reject())
                on_cancel=Callback::new(move |_| vm.cancel_reject())
            />
        </div>
    }
}
