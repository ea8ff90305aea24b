use crate::{
    api::{ApiClient, ApiError, LoginRequest, Role, UserProfile},
    config::{self, SessionPolicy},
    pages::login::repository::LoginRepository,
    router::paths,
    state::{
        notify::use_notifier,
        session::{Session, SessionStore, StorageError},
    },
    utils::navigation::use_navigator,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// What startup restoration found in storage.
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreOutcome {
    SignedOut,
    Restored(UserProfile),
    NeedsRevalidation(UserProfile),
}

impl RestoreOutcome {
    pub fn initial_state(&self) -> AuthState {
        match self {
            RestoreOutcome::SignedOut => AuthState::signed_out(),
            RestoreOutcome::Restored(user) => AuthState::signed_in(user.clone()),
            RestoreOutcome::NeedsRevalidation(user) => AuthState {
                user: Some(user.clone()),
                is_authenticated: false,
                loading: true,
            },
        }
    }
}

pub fn restore_session(session: &SessionStore, policy: SessionPolicy) -> RestoreOutcome {
    match session.load() {
        Ok(Some(Session { user, .. })) => match policy {
            SessionPolicy::TrustStorage => RestoreOutcome::Restored(user),
            SessionPolicy::Revalidate => RestoreOutcome::NeedsRevalidation(user),
        },
        Ok(None) => RestoreOutcome::SignedOut,
        Err(err) => {
            log::warn!("Discarding stored session: {}", err);
            if let Err(err) = session.clear() {
                log::error!("Failed to clear the stored session: {}", err);
            }
            RestoreOutcome::SignedOut
        }
    }
}

/// Confirms a restored token with the backend. Any failure ends the session.
pub async fn revalidate_session(
    api: &ApiClient,
    set_auth: WriteSignal<AuthState>,
) -> Result<UserProfile, ApiError> {
    match api.get_me().await {
        Ok(user) => {
            if let Some(token) = api.session().token() {
                if let Err(err) = api.session().save(&token, &user) {
                    log::warn!("Could not refresh the stored profile: {}", err);
                }
            }
            set_auth.set(AuthState::signed_in(user.clone()));
            Ok(user)
        }
        Err(err) => {
            if !err.is_unauthorized() {
                if let Err(clear_err) = api.session().clear() {
                    log::error!("Failed to clear the stored session: {}", clear_err);
                }
            }
            set_auth.set(AuthState::signed_out());
            Err(err)
        }
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let provided_api = use_context::<ApiClient>();
    let session = provided_api
        .as_ref()
        .map(|api| api.session().clone())
        .or_else(use_context::<SessionStore>)
        .unwrap_or_else(SessionStore::browser);

    let outcome = restore_session(&session, config::session_policy());
    let (auth, set_auth) = create_signal(outcome.initial_state());

    let api = provided_api
        .unwrap_or_else(|| ApiClient::new(session.clone()))
        .with_unauthorized_hook(move || set_auth.set(AuthState::signed_out()));

    provide_context(session);
    provide_context(api.clone());
    provide_context::<AuthContext>((auth, set_auth));

    if let RestoreOutcome::NeedsRevalidation(user) = outcome {
        log::info!("Revalidating stored session for {}", user.email);
        create_effect(move |_| {
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = revalidate_session(&api, set_auth).await {
                    log::info!("Stored session rejected: {}", err);
                }
            });
        });
    }

    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| {
        ApiClient::new(use_context::<SessionStore>().unwrap_or_else(SessionStore::browser))
    })
}

/// Id of the signed-in user, read without tracking.
pub fn current_user_id() -> Option<String> {
    let (auth, _) = use_auth();
    auth.with_untracked(|state| state.user.as_ref().map(|u| u.id.clone()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    /// Portal tab the user signed in from.
    pub portal: Role,
}

pub async fn login_request(
    credentials: LoginCredentials,
    repo: &LoginRepository,
    session: &SessionStore,
    set_auth: WriteSignal<AuthState>,
) -> Result<UserProfile, ApiError> {
    let token = repo
        .login(LoginRequest {
            email: credentials.email.trim().to_string(),
            password: credentials.password,
        })
        .await?;
    let user = repo.fetch_profile(&token).await?;
    session
        .save(&token, &user)
        .map_err(|err| ApiError::unknown(format!("Could not save the session: {}", err)))?;

    if user.role != credentials.portal {
        log::warn!(
            "{} signed in from the {} portal but has the {} role",
            user.email,
            credentials.portal.label(),
            user.role.label()
        );
    }
    set_auth.set(AuthState::signed_in(user.clone()));
    Ok(user)
}

pub fn logout(session: &SessionStore, set_auth: WriteSignal<AuthState>) -> Result<(), StorageError> {
    let result = session.clear();
    set_auth.set(AuthState::signed_out());
    result
}

pub fn use_login_action() -> Action<LoginCredentials, Result<UserProfile, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api_client();
    let session = api.session().clone();
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |credentials: &LoginCredentials| {
        let credentials = credentials.clone();
        let repo = repo.clone();
        let session = session.clone();
        async move { login_request(credentials, &repo, &session, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let session = use_api_client().session().clone();
    let notifier = use_notifier();
    let navigate = use_navigator();

    Callback::new(move |_| {
        match logout(&session, set_auth) {
            Ok(()) => notifier.success("Logged out successfully"),
            Err(err) => {
                log::error!("Logout could not clear storage: {}", err);
                notifier.error("Signed out, but the saved session could not be removed");
            }
        }
        navigate.call(paths::LOGIN.to_string());
    })
}
