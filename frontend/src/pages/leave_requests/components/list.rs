use crate::{
    api::LeaveRequest,
    components::{cards::StatusBadge, empty_state::EmptyState, layout::LoadingSpinner},
    pages::leave_requests::utils::leave_type_label,
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn LeaveRequestList(
    #[prop(into)] requests: Signal<Vec<LeaveRequest>>,
    #[prop(into)] loading: Signal<bool>,
    on_select: Callback<LeaveRequest>,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"My Leave Requests"</h2>
            <Show
                when=move || !(loading.get() && requests.with(Vec::is_empty))
                fallback=|| view! { <LoadingSpinner /> }
            >
                <Show
                    when=move || requests.with(|r| !r.is_empty())
                    fallback=|| view! { <EmptyState title="No leave requests yet" description="Submitted requests appear here." /> }
                >
                    <ul class="divide-y divide-border">
                        <For
                            each=move || requests.get()
                            key=|request| request.id.clone()
                            children=move |request| {
                                let days = request
                                    .days()
                                    .map(|d| format!("{} day{}", d, if d == 1 { "" } else { "s" }))
                                    .unwrap_or_default();
                                let range = format!(
                                    "{} to {}",
                                    format_date(request.start_date),
                                    format_date(request.end_date)
                                );
                                let label = leave_type_label(&request.leave_type);
                                let status = request.status.label();
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="w-full flex items-center justify-between py-3 text-left hover:bg-surface-muted px-2 rounded"
                                            on:click=move |_| on_select.call(request.clone())
                                        >
                                            <div>
                                                <p class="font-medium text-fg">{label}</p>
                                                <p class="text-xs text-fg-muted">{range}" · "{days}</p>
                                            </div>
                                            <StatusBadge label=status />
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
