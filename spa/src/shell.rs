use shared::{JobId, SignInRequest, SignUpRequest, UpdateUserRequest, UserProfile};
use yew::Callback;

use crate::{
    api::JoblyApi,
    components::composite::{
        login_form::LoginFormData, profile_form::ProfileFormData, sign_up_form::SignUpFormData,
    },
    error::ApiError,
    router::Route,
    session::{AuthState, SessionAction},
    storage::{KeyValueStore, SessionStore},
};

/// Session operations triggered by the views.
///
/// Every successful operation mirrors its result to the session store before
/// dispatching to the reducer, so a reload always finds the latest session.
/// Failed calls leave both untouched and hand the error back to the caller.
/// A result that resolves after its session was signed out or replaced is
/// returned to the caller but neither persisted nor dispatched.
#[derive(Clone)]
pub struct Shell<A, S> {
    api: A,
    store: SessionStore<S>,
    dispatch: Callback<SessionAction>,
}

impl<A: JoblyApi, S: KeyValueStore> Shell<A, S> {
    pub fn new(api: A, store: SessionStore<S>, dispatch: Callback<SessionAction>) -> Self {
        Shell {
            api,
            store,
            dispatch,
        }
    }

    pub async fn sign_up(&self, form: SignUpFormData) -> Result<(), ApiError> {
        let username = form.username.clone();
        match self.api.signup_user(&SignUpRequest::from(form)).await {
            Ok(token) => {
                log::info!("User sign up successful, username={username}");
                self.token_acquired(username, token);
                Ok(())
            }
            Err(error) => {
                log::warn!("Sign up failed, username={username}, error={error}");
                Err(error)
            }
        }
    }

    pub async fn log_in(&self, form: LoginFormData) -> Result<(), ApiError> {
        let username = form.username.clone();
        match self.api.login_user(&SignInRequest::from(form)).await {
            Ok(token) => {
                log::info!("User login successful, username={username}");
                self.token_acquired(username, token);
                Ok(())
            }
            Err(error) => {
                log::warn!("Login failed, username={username}, error={error}");
                Err(error)
            }
        }
    }

    /// Drops the session everywhere and returns the route to navigate to.
    pub fn sign_out(&self) -> Route {
        self.store.clear();
        self.api.sign_out();
        self.dispatch.emit(SessionAction::SignedOut);
        log::info!("User signed out");
        Route::Home
    }

    pub async fn update_user(&self, form: ProfileFormData) -> Result<UserProfile, ApiError> {
        let session = self.api.token();
        let username = form.username.clone();
        let user = self
            .api
            .update_user_info(&username, &UpdateUserRequest::from(form))
            .await?;
        log::info!("User profile updated, username={}", user.username);
        self.profile_loaded_for(&session, user.clone());
        Ok(user)
    }

    pub async fn update_job(&self, username: &str, job_id: JobId) -> Result<UserProfile, ApiError> {
        let session = self.api.token();
        self.api.apply_for_job(username, job_id).await?;
        let user = self.api.get_user_info(username).await?;
        log::info!("User applied to job, username={username}, job_id={job_id}");
        self.profile_loaded_for(&session, user.clone());
        Ok(user)
    }

    /// Upgrades a freshly acquired token into a full profile. Runs each time
    /// the session token changes. A failed fetch signs the user out, unless
    /// the token was replaced or dropped while the request was in flight.
    pub async fn refresh_profile(&self, username: String, token: String) {
        let result = self.api.get_user_info(&username).await;
        if !self.is_current(&Some(token)) {
            log::debug!("Discarding profile refresh of a replaced session, username={username}");
            return;
        }
        match result {
            Ok(user) => {
                log::info!("User profile loaded, username={}", user.username);
                self.profile_loaded(user);
            }
            Err(error) => {
                log::warn!("Fail to fetch user profile, signing out, username={username}, error={error}");
                self.sign_out();
            }
        }
    }

    fn token_acquired(&self, username: String, token: String) {
        self.store.save_token(&token);
        self.api.update_token(&token);
        self.dispatch
            .emit(SessionAction::TokenAcquired { username, token });
    }

    fn profile_loaded(&self, user: UserProfile) {
        self.store.save_user(&user);
        self.dispatch.emit(SessionAction::ProfileLoaded(user));
    }

    fn profile_loaded_for(&self, session: &Option<String>, user: UserProfile) {
        if self.is_current(session) {
            self.profile_loaded(user);
        } else {
            log::debug!(
                "Discarding profile of a signed out session, username={}",
                user.username
            );
        }
    }

    // True while the session a request started under is still the live one.
    fn is_current(&self, session: &Option<String>) -> bool {
        session.is_some() && self.api.token() == *session
    }
}

/// Rebuilds the session from persistent storage. Runs once before the UI
/// mounts; a state that already carries a user is returned unchanged.
///
/// Partial or unreadable leftovers are wiped so the next start is clean.
pub fn restore_session<A: JoblyApi, S: KeyValueStore>(
    current: &AuthState,
    api: &A,
    store: &SessionStore<S>,
) -> AuthState {
    if current.is_authenticated() {
        return current.clone();
    }
    match store.load() {
        Ok(Some(session)) => {
            log::info!("Session restored, username={}", session.user.username);
            api.update_token(&session.token);
            current.apply(SessionAction::Restored(session))
        }
        Ok(None) => {
            if store.has_leftovers() {
                log::warn!("Incomplete stored session, cleaning storage");
                store.clear();
            }
            current.clone()
        }
        Err(error) => {
            log::warn!("Fail to restore session, cleaning storage. Error={error}");
            store.clear();
            current.clone()
        }
    }
}
