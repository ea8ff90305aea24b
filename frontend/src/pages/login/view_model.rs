use super::utils::LoginFormState;
use crate::{
    api::{ApiError, UserProfile},
    components::guard::login_redirect,
    state::auth::{self, use_auth, LoginCredentials},
    utils::navigation::use_navigator,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginCredentials, Result<UserProfile, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_credentials() {
            Ok(credentials) => {
                self.error.set(None);
                self.login_action.dispatch(credentials);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let navigate = use_navigator();
    let (auth_state, _) = use_auth();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    error.set(None);
                    form.password.set(String::new());
                    navigate.call(user.role.home().to_string());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(home) = auth_state.with(login_redirect) {
            navigate.call(home.to_string());
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
