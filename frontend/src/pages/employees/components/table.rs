use crate::{
    api::Employee,
    components::{cards::StatusBadge, empty_state::EmptyState, layout::LoadingSpinner},
    utils::format::{format_currency, initials},
};
use leptos::*;

const TH: &str = "px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase";
const TD: &str = "px-4 py-3 text-sm text-fg";

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] can_manage: Signal<bool>,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !(loading.get() && employees.with(Vec::is_empty))
            fallback=|| view! { <LoadingSpinner /> }
        >
            <Show
                when=move || employees.with(|e| !e.is_empty())
                fallback=|| view! { <EmptyState title="No employees found" description="Try a different search or department" /> }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class=TH>"Employee"</th>
                                <th class=TH>"Department"</th>
                                <th class=TH>"Position"</th>
                                <th class=TH>"Salary"</th>
                                <th class=TH>"Status"</th>
                                <th class=TH>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || employees.get()
                                key=|employee| employee.id.clone()
                                children=move |employee| {
                                    let edit_target = employee.clone();
                                    let delete_target = employee.clone();
                                    view! {
                                        <tr>
                                            <td class=TD>
                                                <div class="flex items-center gap-3">
                                                    <span class="h-9 w-9 rounded-full bg-action-primary-bg/10 flex items-center justify-center text-xs font-semibold">
                                                        {initials(&employee.name)}
                                                    </span>
                                                    <div>
                                                        <p class="font-medium">{employee.name.clone()}</p>
                                                        <p class="text-xs text-fg-muted">{employee.email.clone()}</p>
                                                    </div>
                                                </div>
                                            </td>
                                            <td class=TD>{employee.department_name().to_string()}</td>
                                            <td class=TD>{employee.position.clone().unwrap_or_else(|| "-".into())}</td>
                                            <td class=TD>{employee.salary.map(format_currency).unwrap_or_else(|| "-".into())}</td>
                                            <td class=TD><StatusBadge label=employee.status_label().to_string() /></td>
                                            <td class=TD>
                                                <Show when=move || can_manage.get()>
                                                    <div class="flex gap-2">
                                                        <button
                                                            type="button"
                                                            class="text-action-primary-bg hover:underline"
                                                            on:click={
                                                                let target = edit_target.clone();
                                                                move |_| on_edit.call(target.clone())
                                                            }
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            type="button"
                                                            class="text-status-error-text hover:underline"
                                                            on:click={
                                                                let target = delete_target.clone();
                                                                move |_| on_delete.call(target.clone())
                                                            }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                </Show>
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
    use crate::api::test_support::employee_json;
    use crate::test_support::ssr::render_to_string;

    fn rows() -> Vec<Employee> {
        vec![serde_json::from_value(employee_json("e1", "Ravi Menon", "Engineering")).unwrap()]
    }

    #[test]
    fn hr_sees_row_actions() {
        let html = render_to_string(move || {
            view! {
                <EmployeeTable
                    employees=Signal::derive(rows)
                    loading=Signal::derive(|| false)
                    can_manage=Signal::derive(|| true)
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Ravi Menon"));
        assert!(html.contains("RM"));
        assert!(html.contains("$52,000.00"));
        assert!(html.contains("Delete"));
    }

    #[test]
    fn actions_hidden_for_read_only_viewers() {
        let html = render_to_string(move || {
            view! {
                <EmployeeTable
                    employees=Signal::derive(rows)
                    loading=Signal::derive(|| false)
                    can_manage=Signal::derive(|| false)
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Engineering"));
        assert!(!html.contains(">Edit<"));
    }
}
