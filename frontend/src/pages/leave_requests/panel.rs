use super::{
    components::{detail::LeaveDetailDialog, form::LeaveRequestForm, list::LeaveRequestList},
    view_model::use_leave_requests_view_model,
};
use crate::components::layout::PageHeader;
use leptos::*;

#[component]
pub fn LeaveRequestsPanel() -> impl IntoView {
    let vm = use_leave_requests_view_model();

    view! {
        <div class="space-y-6">
            <PageHeader title="Leave Requests" subtitle="Apply for leave and track your requests" />
            <div class="grid gap-6 lg:grid-cols-5">
                <div class="lg:col-span-2">
                    <LeaveRequestForm
                        form=vm.form
                        pending=vm.submit_action.pending()
                        on_submit=Callback::new(move |_| vm.submit())
                    />
                </div>
                <div class="lg:col-span-3">
                    <LeaveRequestList
                        requests=vm.requests.data()
                        loading=vm.requests.loading()
                        on_select=Callback::new(move |request| vm.selected.set(Some(request)))
                    />
                </div>
            </div>
            <LeaveDetailDialog selected=vm.selected />
        </div>
    }
}
