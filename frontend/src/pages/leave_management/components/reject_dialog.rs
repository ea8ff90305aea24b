use crate::{
    api::LeaveRequest,
    components::{dialog::Modal, forms::TextAreaField},
};
use leptos::*;

#[component]
pub fn RejectDialog(
    rejecting: RwSignal<Option<LeaveRequest>>,
    reason: RwSignal<String>,
    #[prop(into)] pending: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal
            is_open=Signal::derive(move || rejecting.with(Option::is_some))
            title="Reject Leave Request".to_string()
            on_close=on_cancel
        >
            <p class="text-sm text-fg-muted">
                "Please provide a reason for rejecting "
                {move || rejecting.with(|r| r.as_ref().map(|r| r.employee_name().to_string()))}
                "'s leave request."
            </p>
            <TextAreaField
                label="Rejection Reason"
                value=reason
                rows=3
                placeholder="Enter reason for rejection..."
                required=true
            />
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=move |_| on_confirm.call(())
                >
                    "Reject Request"
                </button>
            </div>
        </Modal>
    }
}
