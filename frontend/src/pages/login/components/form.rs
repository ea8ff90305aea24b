use crate::{
    api::{ApiError, Role},
    components::error::InlineErrorMessage,
    pages::login::utils::LoginFormState,
};
use leptos::{ev::SubmitEvent, *};

const TAB: &str = "flex-1 py-2 text-sm font-medium rounded-md transition-colors";

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let tab = move |role: Role| {
        view! {
            <button
                type="button"
                role="tab"
                aria-selected=move || (form.portal.get() == role).to_string()
                class=move || {
                    if form.portal.get() == role {
                        format!("{} bg-action-primary-bg text-action-primary-text shadow-sm", TAB)
                    } else {
                        format!("{} text-fg-muted hover:text-fg", TAB)
                    }
                }
                on:click=move |_| form.portal.set(role)
            >
                {role.label()}
            </button>
        }
    };

    view! {
        <form
            class="mt-8 space-y-6 bg-surface-elevated shadow rounded-lg p-6"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <div class="flex gap-2 rounded-lg bg-surface-muted p-1" role="tablist">
                {tab(Role::Employee)}
                {tab(Role::Hr)}
            </div>
            <div class="space-y-4">
                <div>
                    <label for="email" class="block text-sm font-medium text-fg mb-1">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        autocomplete="username"
                        required
                        class="block w-full rounded-md border border-border px-3 py-2 text-sm text-fg"
                        placeholder="you@company.com"
                        prop:value=move || form.email.get()
                        on:input=move |ev| form.email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="password" class="block text-sm font-medium text-fg mb-1">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        required
                        class="block w-full rounded-md border border-border px-3 py-2 text-sm text-fg"
                        prop:value=move || form.password.get()
                        on:input=move |ev| form.password.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <InlineErrorMessage error=error />

            <button
                type="submit"
                disabled=move || pending.get()
                class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
            >
                {move || if pending.get() { "Signing in..." } else { "Sign In" }}
            </button>
        </form>
    }
}
