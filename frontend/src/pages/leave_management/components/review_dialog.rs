use crate::{
    api::{LeaveRequest, LeaveStatus},
    components::{cards::StatusBadge, dialog::Modal},
    pages::leave_requests::components::detail::detail_rows,
};
use leptos::*;

/// Full request details for HR, with decision buttons while the request is pending.
#[component]
pub fn ReviewDialog(
    selected: RwSignal<Option<LeaveRequest>>,
    #[prop(into)] pending: Signal<bool>,
    on_approve: Callback<LeaveRequest>,
    on_reject: Callback<LeaveRequest>,
) -> impl IntoView {
    view! {
        <Modal
            is_open=Signal::derive(move || selected.with(Option::is_some))
            title="Leave Request Details".to_string()
            on_close=Callback::new(move |_| selected.set(None))
            wide=true
        >
            {move || {
                selected
                    .get()
                    .map(|request| {
                        let summary = request.employee_summary().cloned();
                        let decidable = request.status == LeaveStatus::Pending;
                        let (approve_target, reject_target) = (request.clone(), request.clone());
                        view! {
                            <div class="space-y-4">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <h3 class="text-xl font-bold text-fg">{request.employee_name().to_string()}</h3>
                                        <p class="text-sm text-fg-muted">
                                            {summary
                                                .as_ref()
                                                .and_then(|s| s.position.clone())
                                                .unwrap_or_default()}
                                            " "
                                            {request.department_label().to_string()}
                                        </p>
                                        <p class="text-xs text-fg-muted">
                                            {summary.and_then(|s| s.employee_id).unwrap_or_default()}
                                        </p>
                                    </div>
                                    <StatusBadge label=request.status.label() />
                                </div>
                                <dl class="grid grid-cols-3 gap-2 text-sm">
                                    {detail_rows(&request)
                                        .into_iter()
                                        .map(|(label, value)| {
                                            view! {
                                                <dt class="text-fg-muted">{label}</dt>
                                                <dd class="col-span-2 text-fg">{value}</dd>
                                            }
                                        })
                                        .collect_view()}
                                </dl>
                                {decidable.then(|| view! {
                                    <div class="flex justify-end gap-2">
                                        <button
                                            type="button"
                                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                                            disabled=move || pending.get()
                                            on:click=move |_| on_reject.call(reject_target.clone())
                                        >
                                            "Reject"
                                        </button>
                                        <button
                                            type="button"
                                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                            disabled=move || pending.get()
                                            on:click=move |_| on_approve.call(approve_target.clone())
                                        >
                                            "Approve"
                                        </button>
                                    </div>
                                })}
                            </div>
                        }
                    })
            }}
        </Modal>
    }
}
