use crate::{
    api::DepartmentTask,
    components::{dialog::Modal, forms::TextAreaField},
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn TaskDialog(
    selected: RwSignal<Option<DepartmentTask>>,
    comment: RwSignal<String>,
    progress: RwSignal<u8>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editable = move || selected.with(|t| t.as_ref().is_some_and(|t| !t.is_completed()));

    view! {
        <Modal
            is_open=Signal::derive(move || selected.with(Option::is_some))
            title="Task Details".to_string()
            on_close=on_close
            wide=true
        >
            {move || {
                selected
                    .get()
                    .map(|task| {
                        view! {
                            <div class="space-y-3 text-sm">
                                <h3 class="font-medium text-lg text-fg">{task.title.clone()}</h3>
                                <div class="grid grid-cols-2 gap-4">
                                    <div>
                                        <p class="font-medium text-fg-muted">"Status"</p>
                                        <p class="text-fg">{task.status.label()}</p>
                                    </div>
                                    <div>
                                        <p class="font-medium text-fg-muted">"Due Date"</p>
                                        <p class="text-fg">{format_date(task.due_date)}</p>
                                    </div>
                                    <div>
                                        <p class="font-medium text-fg-muted">"Assigned By"</p>
                                        <p class="text-fg">{task.assigned_by.clone().unwrap_or_else(|| "-".into())}</p>
                                    </div>
                                    <div>
                                        <p class="font-medium text-fg-muted">"Department"</p>
                                        <p class="text-fg">{task.department.clone().unwrap_or_else(|| "-".into())}</p>
                                    </div>
                                </div>
                                <div>
                                    <p class="font-medium text-fg-muted">"Description"</p>
                                    <p class="mt-1 text-fg">{task.description.clone()}</p>
                                </div>
                            </div>
                        }
                    })
            }}
            <Show when=editable>
                <div>
                    <div class="flex justify-between mb-2 text-sm">
                        <p class="font-medium text-fg-muted">"Progress"</p>
                        <span class="text-fg">{move || format!("{}%", progress.get())}</span>
                    </div>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        class="w-full"
                        aria-label="Progress"
                        prop:value=move || progress.get().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                                progress.set(value.min(100));
                            }
                        }
                    />
                </div>
                <TextAreaField
                    label="Update Comments"
                    value=comment
                    placeholder="Provide an update on this task..."
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
                        on:click=move |_| on_submit.call(())
                    >
                        {move || if progress.get() >= 100 { "Mark as Complete" } else { "Submit Update" }}
                    </button>
                </div>
            </Show>
        </Modal>
    }
}
