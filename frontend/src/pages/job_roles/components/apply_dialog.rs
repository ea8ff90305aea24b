use crate::{
    api::JobPosting,
    components::{dialog::Modal, forms::TextAreaField},
};
use leptos::*;

#[component]
pub fn ApplyDialog(
    selected: RwSignal<Option<JobPosting>>,
    cover_letter: RwSignal<String>,
    #[prop(into)] pending: Signal<bool>,
    on_apply: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || {
        selected.with(|job| job.as_ref().map(|j| j.title.clone()).unwrap_or_default())
    });

    view! {
        <Modal
            is_open=Signal::derive(move || selected.with(Option::is_some))
            title=title
            on_close=on_close
            wide=true
        >
            {move || {
                selected
                    .get()
                    .map(|job| {
                        view! {
                            <div class="space-y-4 text-sm">
                                <div>
                                    <h4 class="font-medium text-fg mb-1">"Location"</h4>
                                    <p class="text-fg-muted">{job.location.clone()}</p>
                                </div>
                                <div>
                                    <h4 class="font-medium text-fg mb-1">"Description"</h4>
                                    <p class="text-fg-muted">{job.description.clone()}</p>
                                </div>
                                <div>
                                    <h4 class="font-medium text-fg mb-1">"Requirements"</h4>
                                    <ul class="list-disc list-inside text-fg-muted">
                                        {job
                                            .requirements
                                            .iter()
                                            .map(|req| view! { <li>{req.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                                {job.salary.clone().map(|salary| view! {
                                    <div>
                                        <h4 class="font-medium text-fg mb-1">"Salary"</h4>
                                        <p class="text-fg-muted">{salary}</p>
                                    </div>
                                })}
                            </div>
                        }
                    })
            }}
            <TextAreaField
                label="Cover Letter"
                value=cover_letter
                rows=5
                placeholder="Why are you interested in this position?"
                required=true
            />
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                    on:click=move |_| on_close.call(())
                >
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=move |_| on_apply.call(())
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit Application" }}
                </button>
            </div>
        </Modal>
    }
}
