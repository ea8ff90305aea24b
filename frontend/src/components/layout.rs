use crate::{
    api::Role,
    router::{navigation_for, paths},
    state::auth::{use_auth, use_logout},
    utils::{format::initials, navigation::current_path},
};
use leptos::*;

const NAV_LINK: &str =
    "block px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover";
const NAV_LINK_ACTIVE: &str =
    "block px-3 py-2 rounded-md text-sm font-semibold text-action-primary-text bg-action-primary-bg";

fn is_active(link: &str, current: Option<&str>) -> bool {
    current.map(|path| path.trim_end_matches('/') == link).unwrap_or(false)
}

#[component]
pub fn Sidebar(
    role: Role,
    #[prop(optional)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let pathname: Signal<Option<String>> = match use_context::<leptos_router::RouterContext>() {
        Some(_) => {
            let location = leptos_router::use_location();
            Signal::derive(move || Some(location.pathname.get()))
        }
        None => {
            let path = current_path();
            Signal::derive(move || path.clone())
        }
    };
    let links = navigation_for(role)
        .map(|entry| {
            let class = move || {
                if is_active(entry.path, pathname.get().as_deref()) {
                    NAV_LINK_ACTIVE
                } else {
                    NAV_LINK
                }
            };
            view! {
                <a
                    href=entry.path
                    class=class
                    on:click=move |_| {
                        if let Some(cb) = on_navigate {
                            cb.call(());
                        }
                    }
                >
                    {entry.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="space-y-1" aria-label=format!("{} navigation", role.label())>
            {links}
        </nav>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let logout = use_logout();

    let user_name = move || auth.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let role = move || auth.with(|s| s.role());
    let home = move || role().map(|r| r.home()).unwrap_or(paths::LOGIN);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        </button>
                        <a href=home class="text-xl font-semibold text-fg">"WorkWise HRMS"</a>
                    </div>
                    <div class="flex items-center gap-4">
                        <div class="hidden sm:flex items-center gap-2">
                            <span class="inline-flex h-8 w-8 items-center justify-center rounded-full bg-surface-muted text-xs font-bold text-fg">
                                {move || initials(&user_name())}
                            </span>
                            <div class="leading-tight">
                                <p class="text-sm font-medium text-fg">{user_name}</p>
                                <p class="text-xs text-fg-muted">{move || role().map(|r| r.label()).unwrap_or_default()}</p>
                            </div>
                        </div>
                        <button
                            on:click=move |_| logout.call(())
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border px-2 py-3">
                        {move || role().map(|r| view! {
                            <Sidebar role=r on_navigate=Callback::new(move |_| set_menu_open.set(false)) />
                        })}
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let (auth, _) = use_auth();
    let role = move || auth.with(|s| s.role());
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <div class="max-w-7xl mx-auto flex gap-6 py-6 sm:px-6 lg:px-8">
                <aside class="hidden lg:block w-56 shrink-0">
                    {move || role().map(|r| view! { <Sidebar role=r /> })}
                </aside>
                <main class="flex-1 min-w-0">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] actions: Option<View>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col sm:flex-row sm:items-end sm:justify-between gap-3 mb-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">{title}</h1>
                {subtitle.map(|s| view! { <p class="mt-1 text-sm text-fg-muted">{s}</p> })}
            </div>
            {actions}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            <span class="sr-only">"Loading"</span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::is_active;

    #[test]
    fn active_link_ignores_trailing_slash() {
        assert!(is_active("/dashboard", Some("/dashboard/")));
        assert!(!is_active("/dashboard", Some("/dashboard/attendance")));
        assert!(!is_active("/dashboard", None));
    }
}
