use super::{
    components::{form::EmployeeFormDialog, table::EmployeeTable},
    view_model::{use_employees_view_model, EditorMode},
};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    forms::{SearchInput, SelectField},
    layout::{ErrorMessage, PageHeader},
};
use leptos::*;

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    let is_hr = vm.is_hr();
    let departments = vm.department_options();
    let department_filter = Signal::derive(move || {
        let mut options = vec![(String::new(), "All Departments".to_string())];
        options.extend(departments.get());
        options
    });
    let editor = vm.editor;
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .with(|e| e.as_ref().map(|e| e.name.clone()))
            .map(|name| format!("Remove {} from the directory? This cannot be undone.", name))
            .unwrap_or_default()
    });

    let actions = view! {
        <Show when=move || is_hr.get()>
            <button
                type="button"
                class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                on:click=move |_| vm.open_add()
            >
                "Add Employee"
            </button>
        </Show>
    }
    .into_view();

    view! {
        <div class="space-y-6">
            <PageHeader title="Employee Management" subtitle="Manage the employee directory" actions=actions />
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <div class="flex flex-wrap gap-3 items-end">
                    <SearchInput value=vm.search placeholder="Search employees..." />
                    <div class="w-56">
                        <SelectField label="Department" value=vm.department options=department_filter />
                    </div>
                </div>
                {move || {
                    vm.directory
                        .error()
                        .get()
                        .map(|err| view! { <ErrorMessage message=err.error /> })
                }}
                <EmployeeTable
                    employees=vm.filtered()
                    loading=vm.directory.loading()
                    can_manage=is_hr
                    on_edit=Callback::new(move |employee| vm.open_edit(employee))
                    on_delete=Callback::new(move |employee| vm.request_delete(employee))
                />
            </section>
            <EmployeeFormDialog
                form=vm.form
                is_open=Signal::derive(move || editor.with(|m| *m != EditorMode::Closed))
                editing=Signal::derive(move || editor.with(|m| matches!(m, EditorMode::Editing(_))))
                departments=departments
                pending=vm.mutation.pending()
                on_submit=Callback::new(move |_| vm.submit())
                on_close=Callback::new(move |_| vm.close())
            />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete Employee"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{employee_user, hr_user, provide_auth},
        ssr::render_to_string,
    };

    #[test]
    fn hr_sees_add_button() {
        let html = render_to_string(move || {
            provide_auth(Some(hr_user()));
            view! { <EmployeesPanel /> }
        });
        assert!(html.contains("Employee Management"));
        assert!(html.contains("Add Employee"));
        assert!(html.contains("All Departments"));
    }

    #[test]
    fn employees_do_not_see_add_button() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            view! { <EmployeesPanel /> }
        });
        assert!(html.contains("Search employees..."));
        assert!(!html.contains(">Add Employee<"));
    }
}
