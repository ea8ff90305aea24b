use crate::{
    api::DepartmentTask,
    components::{cards::StatusBadge, empty_state::EmptyState, layout::LoadingSpinner},
    pages::department_work::utils::priority_classes,
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn TaskList(
    #[prop(into)] tasks: Signal<Vec<DepartmentTask>>,
    #[prop(into)] loading: Signal<bool>,
    on_open: Callback<DepartmentTask>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !(loading.get() && tasks.with(Vec::is_empty))
            fallback=|| view! { <LoadingSpinner /> }
        >
            <Show
                when=move || tasks.with(|t| !t.is_empty())
                fallback=|| view! { <EmptyState title="No tasks found" /> }
            >
                <div class="space-y-3">
                    <For
                        each=move || tasks.get()
                        key=|task| (task.id.clone(), task.progress)
                        children=move |task| {
                            let due = if task.is_completed() {
                                format!("Completed {}", format_date(task.completed_date))
                            } else {
                                format!("Due {}", format_date(task.due_date))
                            };
                            let progress = task.progress.min(100);
                            let priority = format!(
                                "px-2 py-0.5 rounded-full text-xs {}",
                                priority_classes(&task.priority)
                            );
                            let title = task.title.clone();
                            let description = task.description.clone();
                            let priority_label = task.priority.clone();
                            let status = task.status.label();
                            view! {
                                <button
                                    type="button"
                                    class="w-full text-left border border-border rounded-lg p-4 hover:bg-surface-muted space-y-2"
                                    on:click=move |_| on_open.call(task.clone())
                                >
                                    <div class="flex items-center justify-between gap-2">
                                        <h3 class="font-medium text-lg text-fg">{title}</h3>
                                        <span class=priority>{priority_label}</span>
                                    </div>
                                    <p class="text-sm text-fg-muted line-clamp-2">{description}</p>
                                    <div class="flex items-center justify-between text-xs text-fg-muted">
                                        <span>{due}</span>
                                        <StatusBadge label=status />
                                    </div>
                                    <div class="h-2 rounded-full bg-surface-muted overflow-hidden">
                                        <div
                                            class="h-2 bg-action-primary-bg"
                                            style=format!("width: {}%", progress)
                                        ></div>
                                    </div>
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::task_json;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn task_rows_show_progress_and_due_date() {
        let html = render_to_string(move || {
            let task: DepartmentTask = serde_json::from_value(task_json("t1", "Audit report", "In Progress", 40)).unwrap();
            view! {
                <TaskList
                    tasks=Signal::derive(move || vec![task.clone()])
                    loading=Signal::derive(|| false)
                    on_open=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Audit report"));
        assert!(html.contains("width: 40%"));
        assert!(html.contains("Due Mar 01, 2025"));
    }
}
