use crate::{
    api::{PayrollEntry, PayrollStatus},
    components::{cards::StatusBadge, empty_state::EmptyState, layout::LoadingSpinner},
    utils::format::format_currency,
};
use leptos::*;

const TH: &str = "px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase";
const TH_NUM: &str = "px-4 py-2 text-right text-xs font-medium text-fg-muted uppercase";
const TD: &str = "px-4 py-3 text-sm text-fg";
const TD_NUM: &str = "px-4 py-3 text-sm text-fg text-right tabular-nums";

#[component]
pub fn PayrollTable(
    #[prop(into)] entries: Signal<Vec<PayrollEntry>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    on_approve: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !(loading.get() && entries.with(Vec::is_empty))
            fallback=|| view! { <LoadingSpinner /> }
        >
            <Show
                when=move || entries.with(|e| !e.is_empty())
                fallback=|| view! { <EmptyState title="No payroll entries found" /> }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class=TH>"Employee"</th>
                                <th class=TH>"Department"</th>
                                <th class=TH_NUM>"Base Salary"</th>
                                <th class=TH_NUM>"Bonus"</th>
                                <th class=TH_NUM>"Deductions"</th>
                                <th class=TH_NUM>"Net Salary"</th>
                                <th class=TH>"Status"</th>
                                <th class=TH>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || entries.get()
                                key=|entry| (entry.id.clone(), entry.status.label())
                                children=move |entry| {
                                    let id = entry.id.clone();
                                    view! {
                                        <tr>
                                            <td class=TD>
                                                <p class="font-medium">{entry.employee_name.clone()}</p>
                                                <p class="text-xs text-fg-muted">
                                                    {format!("{} · {}", entry.employee_id, entry.position)}
                                                </p>
                                            </td>
                                            <td class=TD>{entry.department.clone()}</td>
                                            <td class=TD_NUM>{format_currency(entry.base_salary)}</td>
                                            <td class=TD_NUM>{format_currency(entry.bonus)}</td>
                                            <td class=TD_NUM>{format_currency(entry.deductions)}</td>
                                            <td class=format!("{} font-semibold", TD_NUM)>{format_currency(entry.net_salary)}</td>
                                            <td class=TD><StatusBadge label=entry.status.label() /></td>
                                            <td class=TD>
                                                {(entry.status == PayrollStatus::Pending).then(|| view! {
                                                    <button
                                                        type="button"
                                                        class="text-action-primary-bg hover:underline disabled:opacity-50"
                                                        disabled=move || pending.get()
                                                        on:click=move |_| on_approve.call(id.clone())
                                                    >
                                                        "Approve"
                                                    </button>
                                                })}
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
