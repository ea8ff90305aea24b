use crate::{
    components::forms::{SelectField, TextAreaField, TextField},
    pages::leave_requests::utils::{LeaveFormState, LEAVE_TYPES},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LeaveRequestForm(
    form: LeaveFormState,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let types = Signal::derive(|| {
        LEAVE_TYPES
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <form
            class="bg-surface-elevated shadow rounded-lg p-6 space-y-4"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <h2 class="text-lg font-semibold text-fg">"New Leave Request"</h2>
            <SelectField
                label="Leave Type"
                value=form.leave_type
                options=types
                placeholder="Select leave type"
                required=true
            />
            <div class="grid gap-4 sm:grid-cols-2">
                <TextField label="Start Date" value=form.start_date input_type="date" required=true />
                <TextField label="End Date" value=form.end_date input_type="date" required=true />
            </div>
            <TextAreaField
                label="Reason"
                value=form.reason
                rows=3
                placeholder="Briefly describe the reason for your leave"
                required=true
            />
            <button
                type="submit"
                class="w-full inline-flex justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Submitting..." } else { "Submit Request" }}
            </button>
        </form>
    }
}
