use crate::{
    api::LeaveRequest,
    components::{cards::StatusBadge, empty_state::EmptyState},
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn RecentLeave(#[prop(into)] requests: Signal<Vec<LeaveRequest>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-3">"Recent Leave Requests"</h2>
            <Show
                when=move || requests.with(|r| !r.is_empty())
                fallback=|| view! { <EmptyState title="No leave requests yet" /> }
            >
                <ul class="divide-y divide-border">
                    <For
                        each=move || requests.get()
                        key=|request| request.id.clone()
                        children=move |request| {
                            let range = format!(
                                "{} to {}",
                                format_date(request.start_date),
                                format_date(request.end_date)
                            );
                            view! {
                                <li class="flex items-center justify-between py-2">
                                    <div>
                                        <p class="font-medium text-fg">{request.leave_type.clone()}</p>
                                        <p class="text-xs text-fg-muted">{range}</p>
                                    </div>
                                    <StatusBadge label=request.status.label() />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
