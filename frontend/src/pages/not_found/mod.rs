use crate::{api::Role, router::paths, state::auth::use_auth};
use leptos::*;

/// Where the "go back" link points: the signed-in user's home, otherwise the login screen.
pub fn fallback_target(role: Option<Role>) -> (&'static str, &'static str) {
    match role {
        Some(role) => (role.home(), "Return to Dashboard"),
        None => (paths::LOGIN, "Return to Login"),
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let target = move || fallback_target(auth.with(|state| state.role()));

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface-muted px-4">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-fg">"404"</h1>
                <p class="text-xl text-fg-muted">"Oops! Page not found"</p>
                <a
                    href=move || target().0
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                >
                    {move || target().1}
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_depends_on_role() {
        assert_eq!(fallback_target(None).0, paths::LOGIN);
        assert_eq!(fallback_target(Some(Role::Hr)).0, paths::HR_HOME);
        assert_eq!(fallback_target(Some(Role::Employee)).0, paths::EMPLOYEE_HOME);
    }
}
