use crate::{
    api::{ApiError, Role},
    state::auth::LoginCredentials,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub portal: RwSignal<Role>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            portal: create_rw_signal(Role::Employee),
        }
    }
}

impl LoginFormState {
    pub fn to_credentials(&self) -> Result<LoginCredentials, ApiError> {
        validate_credentials(
            &self.email.get_untracked(),
            &self.password.get_untracked(),
            self.portal.get_untracked(),
        )
    }
}

pub fn validate_credentials(
    email: &str,
    password: &str,
    portal: Role,
) -> Result<LoginCredentials, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Please enter your email address"));
    }
    if !email.contains('@') {
        return Err(ApiError::validation("Please enter a valid email address"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password"));
    }
    Ok(LoginCredentials {
        email: email.to_string(),
        password: password.to_string(),
        portal,
    })
}
