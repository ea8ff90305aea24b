use crate::state::notify::{use_notifier, ToastKind};
use leptos::*;

fn toast_classes(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        ToastKind::Info => "bg-surface-elevated border-border text-fg",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = notifier.toasts();

    view! {
        <div class="fixed top-4 right-4 z-[80] flex w-80 flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let role = if toast.kind == ToastKind::Error { "alert" } else { "status" };
                    view! {
                        <div
                            class=format!("flex items-start justify-between gap-3 rounded-md border px-4 py-3 shadow-lg text-sm {}", toast_classes(toast.kind))
                            role=role
                        >
                            <span>{toast.message}</span>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="opacity-70 hover:opacity-100"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
