#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Role, UserProfile};
    use crate::state::auth::{AuthContext, AuthState};
    use crate::state::session::SessionStore;
    use leptos::*;

    pub fn hr_user() -> UserProfile {
        UserProfile {
            id: "u-hr".into(),
            name: "Hema Rao".into(),
            email: "hema@example.com".into(),
            role: Role::Hr,
        }
    }

    pub fn employee_user() -> UserProfile {
        UserProfile {
            id: "u-employee".into(),
            name: "Asha Kumar".into(),
            email: "asha@example.com".into(),
            role: Role::Employee,
        }
    }

    pub fn provide_auth(user: Option<UserProfile>) -> AuthContext {
        let state = match user {
            Some(user) => AuthState::signed_in(user),
            None => AuthState::signed_out(),
        };
        let (auth, set_auth) = create_signal(state);
        provide_context::<AuthContext>((auth, set_auth));
        (auth, set_auth)
    }

    /// In-memory session holding `user`, plus a client pointed at `base_url`.
    pub fn provide_api(base_url: &str, user: &UserProfile) -> ApiClient {
        let session = SessionStore::in_memory();
        session
            .save("test-token", user)
            .unwrap_or_else(|err| panic!("seeding session failed: {err}"));
        let api = ApiClient::new_with_base_url(base_url, session.clone());
        provide_context(session);
        provide_context(api.clone());
        api
    }
}
