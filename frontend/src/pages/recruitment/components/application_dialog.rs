use crate::{
    api::JobApplication,
    components::{
        cards::StatusBadge,
        dialog::Modal,
        forms::{TextAreaField, TextField},
    },
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn ApplicationDialog(
    selected: RwSignal<Option<JobApplication>>,
    rejection_reason: RwSignal<String>,
    interview_date: RwSignal<String>,
    #[prop(into)] pending: Signal<bool>,
    on_accept: Callback<()>,
    on_reject: Callback<()>,
    on_interview: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let undecided = move || selected.with(|a| a.as_ref().is_some_and(|a| !a.status.is_final()));

    view! {
        <Modal
            is_open=Signal::derive(move || selected.with(Option::is_some))
            title="Application Details".to_string()
            on_close=on_close
            wide=true
        >
            {move || {
                selected
                    .get()
                    .map(|app| {
                        view! {
                            <div class="space-y-4 text-sm">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <h3 class="text-xl font-bold text-fg">{app.name.clone()}</h3>
                                        <p class="text-fg-muted">{app.position.clone()}</p>
                                    </div>
                                    <StatusBadge label=app.status.label() />
                                </div>
                                <div class="grid grid-cols-2 gap-4">
                                    <div>
                                        <p class="font-medium text-fg-muted">"Email"</p>
                                        <p class="text-fg">{app.email.clone()}</p>
                                    </div>
                                    <div>
                                        <p class="font-medium text-fg-muted">"Phone"</p>
                                        <p class="text-fg">{app.phone.clone().unwrap_or_else(|| "-".into())}</p>
                                    </div>
                                    <div>
                                        <p class="font-medium text-fg-muted">"Applied"</p>
                                        <p class="text-fg">{format_date(app.apply_date)}</p>
                                    </div>
                                    <div>
                                        <p class="font-medium text-fg-muted">"Experience"</p>
                                        <p class="text-fg">{app.experience.clone().unwrap_or_else(|| "-".into())}</p>
                                    </div>
                                </div>
                                {(!app.skills.is_empty()).then(|| view! {
                                    <div>
                                        <p class="font-medium text-fg-muted">"Skills"</p>
                                        <p class="text-fg">{app.skills.join(", ")}</p>
                                    </div>
                                })}
                                {app.cover_letter.clone().map(|letter| view! {
                                    <div>
                                        <p class="font-medium text-fg-muted">"Cover Letter"</p>
                                        <p class="mt-1 text-fg whitespace-pre-line">{letter}</p>
                                    </div>
                                })}
                                {app.interview_date.map(|date| view! {
                                    <p class="text-fg">"Interview on " {format_date(Some(date))}</p>
                                })}
                                {app.rejection_reason.clone().map(|reason| view! {
                                    <p class="text-status-error-text">"Rejected: " {reason}</p>
                                })}
                            </div>
                        }
                    })
            }}
            <Show when=undecided>
                <div class="border-t border-border pt-4 space-y-4">
                    <div class="flex items-end gap-2">
                        <div class="flex-1">
                            <TextField label="Interview Date" value=interview_date input_type="date" />
                        </div>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| on_interview.call(())
                        >
                            "Schedule"
                        </button>
                    </div>
                    <TextAreaField
                        label="Rejection Reason"
                        value=rejection_reason
                        rows=2
                        placeholder="Required when rejecting"
                    />
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| on_reject.call(())
                        >
                            "Reject"
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| on_accept.call(())
                        >
                            "Accept"
                        </button>
                    </div>
                </div>
            </Show>
        </Modal>
    }
}
