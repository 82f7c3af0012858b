#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use jobly_web::{
    api::JoblyApi,
    components::composite::{login_form::LoginFormData, sign_up_form::SignUpFormData},
    error::ApiError,
    session::{AuthState, SessionAction},
    shell::Shell,
    storage::{MemoryStorage, SessionStore},
};
use secrecy::ExposeSecret;
use shared::{
    Company, CompanyDetail, Job, JobId, SignInRequest, SignUpRequest, UpdateUserRequest,
    UserProfile,
};
use yew::Callback;

#[derive(Default)]
struct Backend {
    users: HashMap<String, UserProfile>,
    passwords: HashMap<String, String>,
    next_token: String,
    profile_fails: bool,
    token: Option<String>,
    calls: Vec<String>,
    in_flight: Option<Rc<dyn Fn()>>,
}

/// In-process stand-in for the Jobly backend. Clones share state.
#[derive(Clone, Default)]
pub struct FakeApi {
    backend: Rc<RefCell<Backend>>,
}

impl FakeApi {
    pub fn issuing(token: &str) -> Self {
        let api = FakeApi::default();
        api.backend.borrow_mut().next_token = token.to_owned();
        api
    }

    pub fn with_user(self, user: UserProfile, password: &str) -> Self {
        {
            let mut backend = self.backend.borrow_mut();
            backend
                .passwords
                .insert(user.username.clone(), password.to_owned());
            backend.users.insert(user.username.clone(), user);
        }
        self
    }

    pub fn fail_profile_fetches(&self) {
        self.backend.borrow_mut().profile_fails = true;
    }

    /// Runs `hook` while every following profile update or job application
    /// is on the wire.
    pub fn while_in_flight(&self, hook: impl Fn() + 'static) {
        self.backend.borrow_mut().in_flight = Some(Rc::new(hook));
    }

    pub fn calls(&self) -> Vec<String> {
        self.backend.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.backend.borrow_mut().calls.clear();
    }

    fn record(&self, call: String) {
        self.backend.borrow_mut().calls.push(call);
    }

    fn in_flight(&self) {
        let hook = self.backend.borrow().in_flight.clone();
        if let Some(hook) = hook {
            hook();
        }
    }
}

impl JoblyApi for FakeApi {
    async fn signup_user(&self, request: &SignUpRequest) -> Result<String, ApiError> {
        self.record(format!("signup {}", request.username));
        let mut backend = self.backend.borrow_mut();
        if backend.users.contains_key(&request.username) {
            return Err(ApiError::Auth(format!(
                "Duplicate username: {}",
                request.username
            )));
        }
        backend.passwords.insert(
            request.username.clone(),
            request.password.expose_secret().to_owned(),
        );
        backend.users.insert(
            request.username.clone(),
            UserProfile {
                username: request.username.clone(),
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                email: request.email.clone(),
                is_admin: false,
                applications: vec![],
            },
        );
        Ok(backend.next_token.clone())
    }

    async fn login_user(&self, request: &SignInRequest) -> Result<String, ApiError> {
        self.record(format!("login {}", request.username));
        let backend = self.backend.borrow();
        match backend.passwords.get(&request.username) {
            Some(password) if password == request.password.expose_secret() => {
                Ok(backend.next_token.clone())
            }
            _ => Err(ApiError::Auth("Invalid username/password".to_owned())),
        }
    }

    async fn get_user_info(&self, username: &str) -> Result<UserProfile, ApiError> {
        self.record(format!("get_user {username}"));
        let backend = self.backend.borrow();
        if backend.profile_fails {
            return Err(ApiError::Unexpected {
                status: 500,
                message: "boom".to_owned(),
            });
        }
        backend
            .users
            .get(username)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("No user: {username}")))
    }

    async fn update_user_info(
        &self,
        username: &str,
        request: &UpdateUserRequest,
    ) -> Result<UserProfile, ApiError> {
        self.record(format!("update_user {username}"));
        self.in_flight();
        let mut backend = self.backend.borrow_mut();
        let user = backend
            .users
            .get_mut(username)
            .ok_or_else(|| ApiError::NotFound(format!("No user: {username}")))?;
        if let Some(first_name) = &request.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &request.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(email) = &request.email {
            user.email = email.clone();
        }
        Ok(user.clone())
    }

    async fn apply_for_job(&self, username: &str, job_id: JobId) -> Result<(), ApiError> {
        self.record(format!("apply {username} {job_id}"));
        self.in_flight();
        let mut backend = self.backend.borrow_mut();
        let user = backend
            .users
            .get_mut(username)
            .ok_or_else(|| ApiError::NotFound(format!("No user: {username}")))?;
        user.applications.push(job_id);
        Ok(())
    }

    async fn get_companies(&self, _name: Option<&str>) -> Result<Vec<Company>, ApiError> {
        Ok(vec![])
    }

    async fn get_company(&self, handle: &str) -> Result<CompanyDetail, ApiError> {
        Err(ApiError::NotFound(format!("No company: {handle}")))
    }

    async fn get_jobs(&self, _title: Option<&str>) -> Result<Vec<Job>, ApiError> {
        Ok(vec![])
    }

    fn update_token(&self, token: &str) {
        self.backend.borrow_mut().token = Some(token.to_owned());
    }

    fn token(&self) -> Option<String> {
        self.backend.borrow().token.clone()
    }

    fn sign_out(&self) {
        self.record("sign_out".to_owned());
        self.backend.borrow_mut().token = None;
    }
}

/// A shell wired to the fake backend, in-memory storage and a local copy of
/// the reducer state.
pub struct Harness {
    pub api: FakeApi,
    pub storage: MemoryStorage,
    pub shell: Shell<FakeApi, MemoryStorage>,
    state: Rc<RefCell<AuthState>>,
}

impl Harness {
    pub fn new(api: FakeApi) -> Self {
        let storage = MemoryStorage::default();
        let state = Rc::new(RefCell::new(AuthState::default()));
        let dispatch = {
            let state = state.clone();
            Callback::from(move |action: SessionAction| {
                let next = state.borrow().apply(action);
                *state.borrow_mut() = next;
            })
        };
        let shell = Shell::new(api.clone(), SessionStore::new(storage.clone()), dispatch);
        Harness {
            api,
            storage,
            shell,
            state,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn store(&self) -> SessionStore<MemoryStorage> {
        SessionStore::new(self.storage.clone())
    }

    /// Runs the refresh the session provider schedules on a token change.
    pub async fn settle(&self) {
        let state = self.state();
        if let (Some(username), Some(token)) = (state.username(), state.token()) {
            self.shell
                .refresh_profile(username.to_owned(), token.to_owned())
                .await;
        }
    }
}

pub fn profile(username: &str) -> UserProfile {
    UserProfile {
        username: username.to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Liddell".to_owned(),
        email: format!("{username}@example.com"),
        is_admin: false,
        applications: vec![],
    }
}

pub fn sign_up_form(username: &str, password: &str) -> SignUpFormData {
    SignUpFormData {
        username: username.to_owned(),
        password: password.to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Liddell".to_owned(),
        email: format!("{username}@example.com"),
    }
}

pub fn login_form(username: &str, password: &str) -> LoginFormData {
    LoginFormData {
        username: username.to_owned(),
        password: password.to_owned(),
    }
}
