use crate::{
    components::empty_state::EmptyState,
    pages::hr_dashboard::utils::DepartmentCount,
};
use leptos::*;

#[component]
pub fn DepartmentSummary(#[prop(into)] departments: Signal<Vec<DepartmentCount>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-3">"Department Summary"</h2>
            <Show
                when=move || departments.with(|d| !d.is_empty())
                fallback=|| view! { <EmptyState title="No departments yet" /> }
            >
                <ul class="divide-y divide-border">
                    {move || {
                        departments
                            .get()
                            .into_iter()
                            .map(|dept| {
                                let count = format!(
                                    "{} employee{}",
                                    dept.employees,
                                    if dept.employees == 1 { "" } else { "s" }
                                );
                                view! {
                                    <li class="flex justify-between py-2 text-sm">
                                        <span class="text-fg">{dept.name}</span>
                                        <span class="text-fg-muted">{count}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
