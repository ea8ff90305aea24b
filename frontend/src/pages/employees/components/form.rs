use crate::{
    api::Role,
    components::{
        dialog::Modal,
        forms::{SelectField, TextField},
    },
    pages::employees::utils::{EmployeeFormState, EMPLOYEE_STATUSES},
};
use leptos::{ev::SubmitEvent, *};

/// Add/edit dialog. `editing` switches to the update layout: no password, with status.
#[component]
pub fn EmployeeFormDialog(
    form: EmployeeFormState,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] departments: Signal<Vec<(String, String)>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let roles = Signal::derive(|| {
        [Role::Employee, Role::Hr]
            .iter()
            .map(|role| (role.as_str().to_string(), role.label().to_string()))
            .collect::<Vec<_>>()
    });
    let statuses = Signal::derive(|| {
        EMPLOYEE_STATUSES
            .iter()
            .map(|s| (s.to_string(), s.to_string()))
            .collect::<Vec<_>>()
    });
    let title = Signal::derive(move || {
        if editing.get() { "Edit Employee" } else { "Add New Employee" }.to_string()
    });

    view! {
        <Modal is_open=is_open title=title on_close=on_close wide=true>
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <div class="grid gap-4 sm:grid-cols-2">
                    <TextField label="Full Name" value=form.name placeholder="Enter full name" required=true />
                    <TextField label="Email" value=form.email input_type="email" placeholder="Enter email address" required=true />
                    <TextField label="Phone" value=form.phone placeholder="Enter phone number" />
                    <TextField label="Position" value=form.position placeholder="Enter job position" />
                    <SelectField
                        label="Department"
                        value=form.department
                        options=departments
                        placeholder="Select department"
                        required=true
                    />
                    <TextField label="Salary" value=form.salary input_type="number" placeholder="Enter salary" required=true />
                    <TextField label="Date of Birth" value=form.dob input_type="date" />
                    <SelectField label="Role" value=form.role options=roles />
                </div>
                <TextField label="Address" value=form.address placeholder="Enter address" />
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <TextField
                                label="Initial Password"
                                value=form.password
                                input_type="password"
                                placeholder="Set a temporary password"
                                required=true
                            />
                        }
                    }
                >
                    <SelectField label="Status" value=form.status options=statuses />
                </Show>
                <div class="flex justify-end gap-2 pt-2">
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || match (pending.get(), editing.get()) {
                            (true, _) => "Saving...",
                            (false, true) => "Update Employee",
                            (false, false) => "Add Employee",
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(editing: bool) -> String {
        render_to_string(move || {
            let departments = Signal::derive(|| vec![("d-finance".to_string(), "Finance".to_string())]);
            view! {
                <EmployeeFormDialog
                    form=EmployeeFormState::default()
                    is_open=Signal::derive(|| true)
                    editing=Signal::derive(move || editing)
                    departments=departments
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn add_layout_asks_for_password() {
        let html = render(false);
        assert!(html.contains("Add New Employee"));
        assert!(html.contains("Initial Password"));
        assert!(html.contains("Finance"));
    }

    #[test]
    fn edit_layout_offers_status() {
        let html = render(true);
        assert!(html.contains("Edit Employee"));
        assert!(html.contains("On Leave"));
        assert!(!html.contains("Initial Password"));
    }
}
