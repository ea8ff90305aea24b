use crate::components::{
    common::{Button, ButtonVariant},
    dialog::Modal,
};
use leptos::*;

/// Yes/no prompt on top of [`Modal`]. `destructive` switches the confirm button to the danger style.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let variant = if destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_label = Signal::derive(move || confirm_label.get());
    let confirm_disabled = Signal::derive(move || confirm_disabled.get());
    let confirm_text = move || {
        let text = confirm_label.get();
        if text.trim().is_empty() {
            "Confirm".to_string()
        } else {
            text
        }
    };

    view! {
        <Modal is_open=is_open title=title on_close=on_cancel>
            <p class="text-sm text-fg-muted">{move || message.get()}</p>
            <div class="flex justify-end gap-2">
                <Button variant=ButtonVariant::Secondary on_click=on_cancel>
                    "Cancel"
                </Button>
                <Button variant=variant disabled=confirm_disabled on_click=on_confirm>
                    {confirm_text}
                </Button>
            </div>
        </Modal>
    }
}
