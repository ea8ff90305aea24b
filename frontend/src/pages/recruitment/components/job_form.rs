use crate::{
    components::{
        dialog::Modal,
        forms::{SelectField, TextAreaField, TextField},
    },
    pages::recruitment::utils::{JobFormState, JOB_TYPES},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn JobFormDialog(
    form: JobFormState,
    is_open: RwSignal<bool>,
    #[prop(into)] departments: Signal<Vec<(String, String)>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let types = Signal::derive(|| {
        JOB_TYPES
            .iter()
            .map(|t| (t.to_string(), t.to_string()))
            .collect::<Vec<_>>()
    });
    let close = Callback::new(move |_| is_open.set(false));

    view! {
        <Modal is_open=is_open title="Create New Job Posting".to_string() on_close=close wide=true>
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <TextField label="Job Title" value=form.title placeholder="Enter job title" required=true />
                <div class="grid gap-4 sm:grid-cols-2">
                    <SelectField
                        label="Department"
                        value=form.department
                        options=departments
                        placeholder="Select department"
                        required=true
                    />
                    <TextField label="Location" value=form.location placeholder="Enter location" required=true />
                    <SelectField
                        label="Employment Type"
                        value=form.employment_type
                        options=types
                        placeholder="Select type"
                        required=true
                    />
                    <TextField label="Application Deadline" value=form.deadline input_type="date" required=true />
                </div>
                <TextField label="Salary Range" value=form.salary placeholder="e.g. $60k - $80k" />
                <TextAreaField
                    label="Job Description"
                    value=form.description
                    rows=4
                    placeholder="Enter detailed job description..."
                    required=true
                />
                <TextAreaField
                    label="Requirements"
                    value=form.requirements
                    rows=3
                    placeholder="One requirement per line"
                />
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border"
                        on:click=move |_| is_open.set(false)
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Creating..." } else { "Create Job Posting" }}
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

    #[test]
    fn form_lists_job_types() {
        let html = render_to_string(move || {
            view! {
                <JobFormDialog
                    form=JobFormState::default()
                    is_open=create_rw_signal(true)
                    departments=Signal::derive(Vec::<(String, String)>::new)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Create New Job Posting"));
        assert!(html.contains("Internship"));
        assert!(html.contains("Select department"));
    }
}
