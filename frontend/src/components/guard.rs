use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    router::paths,
    state::auth::{use_auth, AuthState},
    utils::navigation::use_navigator,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    Render,
    Redirect(&'static str),
}

/// Decides what a protected route shows for the current session.
pub fn evaluate_guard(state: &AuthState, required: Role) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Loading;
    }
    match (&state.user, state.is_authenticated) {
        (Some(user), true) if user.role == required => GuardOutcome::Render,
        (Some(user), true) => GuardOutcome::Redirect(user.role.home()),
        _ => GuardOutcome::Redirect(paths::LOGIN),
    }
}

/// Where the login screen should send a user who is already signed in.
pub fn login_redirect(state: &AuthState) -> Option<&'static str> {
    if state.loading || !state.is_authenticated {
        return None;
    }
    state.user.as_ref().map(|user| user.role.home())
}

#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let outcome = create_memo(move |_| auth.with(|state| evaluate_guard(state, role)));
    let navigate = use_navigator();

    create_effect(move |_| {
        if let GuardOutcome::Redirect(target) = outcome.get() {
            log::info!("Route requires {} role; redirecting to {}", role.as_str(), target);
            navigate.call(target.to_string());
        }
    });

    view! {
        <Show
            when=move || outcome.get() == GuardOutcome::Render
            fallback=move || {
                if outcome.get() == GuardOutcome::Loading {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, hr_user};

    #[test]
    fn guard_waits_while_loading() {
        let state = AuthState {
            user: Some(hr_user()),
            is_authenticated: false,
            loading: true,
        };
        assert_eq!(evaluate_guard(&state, Role::Hr), GuardOutcome::Loading);
        assert_eq!(login_redirect(&state), None);
    }

    #[test]
    fn guard_sends_anonymous_users_to_login() {
        for role in [Role::Hr, Role::Employee] {
            assert_eq!(
                evaluate_guard(&AuthState::signed_out(), role),
                GuardOutcome::Redirect("/")
            );
        }
    }

    #[test]
    fn role_mismatch_redirects_to_session_home() {
        let hr = AuthState::signed_in(hr_user());
        let employee = AuthState::signed_in(employee_user());
        assert_eq!(
            evaluate_guard(&hr, Role::Employee),
            GuardOutcome::Redirect("/hr-dashboard")
        );
        assert_eq!(
            evaluate_guard(&employee, Role::Hr),
            GuardOutcome::Redirect("/dashboard")
        );
        assert_eq!(evaluate_guard(&hr, Role::Hr), GuardOutcome::Render);
        assert_eq!(evaluate_guard(&employee, Role::Employee), GuardOutcome::Render);
    }

    #[test]
    fn every_protected_route_redirects_the_other_role_home() {
        for entry in crate::router::ROUTES {
            let Some(required) = entry.role else { continue };
            for user in [hr_user(), employee_user()] {
                let expected = if user.role == required {
                    GuardOutcome::Render
                } else {
                    GuardOutcome::Redirect(user.role.home())
                };
                let state = AuthState::signed_in(user);
                assert_eq!(evaluate_guard(&state, required), expected, "{}", entry.path);
            }
        }
    }

    #[test]
    fn signed_in_users_skip_login() {
        assert_eq!(
            login_redirect(&AuthState::signed_in(employee_user())),
            Some("/dashboard")
        );
        assert_eq!(login_redirect(&AuthState::signed_out()), None);
    }
}
