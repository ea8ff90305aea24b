use crate::{
    api::PayrollRun,
    components::{cards::StatusBadge, empty_state::EmptyState},
    utils::format::{format_currency, format_date},
};
use leptos::*;

#[component]
pub fn PayrollHistory(#[prop(into)] runs: Signal<Vec<PayrollRun>>) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"Payroll History"</h2>
            <Show
                when=move || runs.with(|r| !r.is_empty())
                fallback=|| view! { <EmptyState title="No payroll runs yet" /> }
            >
                <ul class="divide-y divide-border">
                    {move || {
                        runs.get()
                            .into_iter()
                            .map(|run| {
                                view! {
                                    <li class="py-3 flex items-center justify-between text-sm">
                                        <div>
                                            <p class="font-medium text-fg">{run.month.clone()}</p>
                                            <p class="text-fg-muted">
                                                {format!("{} employees · processed {}", run.employee_count, format_date(run.processed_date))}
                                            </p>
                                        </div>
                                        <div class="flex items-center gap-3">
                                            <span class="font-semibold text-fg">{format_currency(run.total_amount)}</span>
                                            <StatusBadge label=run.status.clone() />
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
