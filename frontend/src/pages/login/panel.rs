use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let on_submit = Callback::new(move |_| vm.submit());

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"WorkWise HRMS"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Sign in to your portal"</p>
                </div>
                <LoginForm
                    form=vm.form
                    error=vm.error.into()
                    pending=vm.login_action.pending().into()
                    on_submit=on_submit
                />
            </div>
        </div>
    }
}
