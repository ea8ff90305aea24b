use crate::{
    api::{LeaveRequest, LeaveStatus},
    components::{cards::StatusBadge, empty_state::EmptyState, layout::LoadingSpinner},
    pages::leave_requests::utils::leave_type_label,
    utils::format::format_date,
};
use leptos::*;

const TH: &str = "px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase";
const TD: &str = "px-4 py-3 text-sm text-fg";

#[component]
pub fn LeaveRequestTable(
    #[prop(into)] requests: Signal<Vec<LeaveRequest>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    on_view: Callback<LeaveRequest>,
    on_approve: Callback<LeaveRequest>,
    on_reject: Callback<LeaveRequest>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !(loading.get() && requests.with(Vec::is_empty))
            fallback=|| view! { <LoadingSpinner /> }
        >
            <Show
                when=move || requests.with(|r| !r.is_empty())
                fallback=|| view! { <EmptyState title="No leave requests found" /> }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class=TH>"Employee"</th>
                                <th class=TH>"Type"</th>
                                <th class=TH>"Dates"</th>
                                <th class=TH>"Days"</th>
                                <th class=TH>"Status"</th>
                                <th class=TH>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || requests.get()
                                key=|request| (request.id.clone(), request.status.as_str())
                                children=move |request| {
                                    let is_pending = request.status == LeaveStatus::Pending;
                                    let (view_target, approve_target, reject_target) =
                                        (request.clone(), request.clone(), request.clone());
                                    view! {
                                        <tr>
                                            <td class=TD>
                                                <p class="font-medium">{request.employee_name().to_string()}</p>
                                                <p class="text-xs text-fg-muted">{request.department_label().to_string()}</p>
                                            </td>
                                            <td class=TD>{leave_type_label(&request.leave_type)}</td>
                                            <td class=TD>
                                                {format!("{} - {}", format_date(request.start_date), format_date(request.end_date))}
                                            </td>
                                            <td class=TD>{request.days().map(|d| d.to_string()).unwrap_or_else(|| "-".into())}</td>
                                            <td class=TD><StatusBadge label=request.status.label() /></td>
                                            <td class=TD>
                                                <div class="flex gap-2">
                                                    <button
                                                        type="button"
                                                        class="text-action-primary-bg hover:underline"
                                                        on:click=move |_| on_view.call(view_target.clone())
                                                    >
                                                        "View"
                                                    </button>
                                                    {is_pending.then(|| view! {
                                                        <button
                                                            type="button"
                                                            class="text-status-success-text hover:underline disabled:opacity-50"
                                                            disabled=move || pending.get()
                                                            on:click=move |_| on_approve.call(approve_target.clone())
                                                        >
                                                            "Approve"
                                                        </button>
                                                        <button
                                                            type="button"
                                                            class="text-status-error-text hover:underline disabled:opacity-50"
                                                            disabled=move || pending.get()
                                                            on:click=move |_| on_reject.call(reject_target.clone())
                                                        >
                                                            "Reject"
                                                        </button>
                                                    })}
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::leave_json;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn only_pending_rows_offer_decisions() {
        let html = render_to_string(move || {
            let rows: Vec<LeaveRequest> = [
                leave_json("l1", "rejected", "2025-01-14", "2025-01-15"),
            ]
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect();
            view! {
                <LeaveRequestTable
                    requests=Signal::derive(move || rows.clone())
                    loading=Signal::derive(|| false)
                    pending=Signal::derive(|| false)
                    on_view=Callback::new(|_| {})
                    on_approve=Callback::new(|_| {})
                    on_reject=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Ravi Menon"));
        assert!(html.contains("Jan 14, 2025 - Jan 15, 2025"));
        assert!(html.contains("View"));
        assert!(!html.contains("Approve"));
    }

    #[test]
    fn pending_row_has_approve_and_reject() {
        let html = render_to_string(move || {
            let rows: Vec<LeaveRequest> =
                vec![serde_json::from_value(leave_json("l1", "pending", "2025-01-14", "2025-01-15")).unwrap()];
            view! {
                <LeaveRequestTable
                    requests=Signal::derive(move || rows.clone())
                    loading=Signal::derive(|| false)
                    pending=Signal::derive(|| false)
                    on_view=Callback::new(|_| {})
                    on_approve=Callback::new(|_| {})
                    on_reject=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Approve"));
        assert!(html.contains("Reject"));
    }
}
