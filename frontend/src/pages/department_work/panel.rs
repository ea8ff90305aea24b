use super::{
    components::{task_dialog::TaskDialog, task_list::TaskList},
    utils::TaskTab,
    view_model::use_department_work_view_model,
};
use crate::components::{forms::SearchInput, layout::PageHeader};
use leptos::*;

const TAB: &str = "px-4 py-2 text-sm font-medium rounded-md";
const TAB_ACTIVE: &str = "bg-surface-elevated text-fg shadow";
const TAB_IDLE: &str = "text-fg-muted hover:text-fg";

#[component]
pub fn DepartmentWorkPanel() -> impl IntoView {
    let vm = use_department_work_view_model();
    let tab_class = move |tab: TaskTab| {
        move || {
            format!(
                "{} {}",
                TAB,
                if vm.tab.get() == tab { TAB_ACTIVE } else { TAB_IDLE }
            )
        }
    };

    view! {
        <div class="space-y-6">
            <PageHeader title="Department Work" subtitle="Track and update the tasks assigned to you" />
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <SearchInput value=vm.search placeholder="Search tasks..." />
                <div class="inline-flex gap-1 rounded-lg bg-surface-muted p-1" role="tablist">
                    <button
                        type="button"
                        role="tab"
                        class=tab_class(TaskTab::Active)
                        on:click=move |_| vm.tab.set(TaskTab::Active)
                    >
                        "Active Tasks"
                    </button>
                    <button
                        type="button"
                        role="tab"
                        class=tab_class(TaskTab::Completed)
                        on:click=move |_| vm.tab.set(TaskTab::Completed)
                    >
                        "Completed"
                    </button>
                </div>
                <TaskList
                    tasks=vm.visible_tasks()
                    loading=vm.tasks.loading()
                    on_open=Callback::new(move |task| vm.open(task))
                />
            </section>
            <TaskDialog
                selected=vm.selected
                comment=vm.comment
                progress=vm.progress
                pending=vm.mutation.pending()
                on_submit=Callback::new(move |_| vm.submit())
                on_close=Callback::new(move |_| vm.close())
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee_user, helpers::provide_auth, ssr::render_to_string};

    #[test]
    fn panel_renders_tabs() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            view! { <DepartmentWorkPanel /> }
        });
        assert!(html.contains("Active Tasks"));
        assert!(html.contains("Search tasks..."));
    }
}
