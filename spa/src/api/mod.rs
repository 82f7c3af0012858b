use std::{cell::RefCell, rc::Rc};

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use shared::{
    Company, CompanyDetail, Job, JobId, SignInRequest, SignUpRequest, UpdateUserRequest, UserProfile,
};
use url::Url;

use crate::error::ApiError;

pub mod auth_api;
pub mod companies_api;
pub mod jobs_api;
pub mod users_api;

/// Operations of the Jobly backend consumed by the application shell and the
/// views.
#[allow(async_fn_in_trait)]
pub trait JoblyApi {
    async fn signup_user(&self, request: &SignUpRequest) -> Result<String, ApiError>;
    async fn login_user(&self, request: &SignInRequest) -> Result<String, ApiError>;
    async fn get_user_info(&self, username: &str) -> Result<UserProfile, ApiError>;
    async fn update_user_info(
        &self,
        username: &str,
        request: &UpdateUserRequest,
    ) -> Result<UserProfile, ApiError>;
    async fn apply_for_job(&self, username: &str, job_id: JobId) -> Result<(), ApiError>;
    async fn get_companies(&self, name: Option<&str>) -> Result<Vec<Company>, ApiError>;
    async fn get_company(&self, handle: &str) -> Result<CompanyDetail, ApiError>;
    async fn get_jobs(&self, title: Option<&str>) -> Result<Vec<Job>, ApiError>;

    /// Token sent with every following request.
    fn update_token(&self, token: &str);
    fn token(&self) -> Option<String>;
    fn sign_out(&self);
}

/// HTTP client for the Jobly backend. Clones share the bearer token.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: Rc<str>,
    token: Rc<RefCell<Option<String>>>,
}

impl PartialEq for HttpApi {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.token, &other.token) && self.base_url == other.base_url
    }
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        HttpApi {
            base_url: Rc::from(base_url),
            token: Rc::new(RefCell::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bearer(&self) -> String {
        self.token.borrow().clone().unwrap_or_default()
    }
}

impl JoblyApi for HttpApi {
    async fn signup_user(&self, request: &SignUpRequest) -> Result<String, ApiError> {
        let response = auth_api::register(&self.base_url, request).await?;
        Ok(response.token)
    }

    async fn login_user(&self, request: &SignInRequest) -> Result<String, ApiError> {
        let response = auth_api::token(&self.base_url, request).await?;
        Ok(response.token)
    }

    async fn get_user_info(&self, username: &str) -> Result<UserProfile, ApiError> {
        users_api::get_user(&self.base_url, &self.bearer(), username).await
    }

    async fn update_user_info(
        &self,
        username: &str,
        request: &UpdateUserRequest,
    ) -> Result<UserProfile, ApiError> {
        users_api::update_user(&self.base_url, &self.bearer(), username, request).await
    }

    async fn apply_for_job(&self, username: &str, job_id: JobId) -> Result<(), ApiError> {
        users_api::apply_to_job(&self.base_url, &self.bearer(), username, job_id).await?;
        Ok(())
    }

    async fn get_companies(&self, name: Option<&str>) -> Result<Vec<Company>, ApiError> {
        companies_api::list_companies(&self.base_url, &self.bearer(), name).await
    }

    async fn get_company(&self, handle: &str) -> Result<CompanyDetail, ApiError> {
        companies_api::get_company(&self.base_url, &self.bearer(), handle).await
    }

    async fn get_jobs(&self, title: Option<&str>) -> Result<Vec<Job>, ApiError> {
        jobs_api::list_jobs(&self.base_url, &self.bearer(), title).await
    }

    fn update_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn sign_out(&self) {
        self.token.borrow_mut().take();
    }
}

/// Appends percent-encoded path segments to the base URL.
pub(crate) fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| ApiError::Endpoint(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Same as [`endpoint`] plus a single optional, non-blank query filter.
pub(crate) fn endpoint_with_filter(
    base_url: &str,
    segments: &[&str],
    key: &str,
    value: Option<&str>,
) -> Result<Url, ApiError> {
    let mut url = endpoint(base_url, segments)?;
    if let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) {
        url.query_pairs_mut().append_pair(key, value);
    }
    Ok(url)
}

pub(crate) fn authorization(token: &str) -> String {
    format!("Bearer {token}")
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return Ok(response.json::<T>().await?);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!(
        "Api unexpected response, url={url}, status={status}, response={body}",
        url = response.url()
    );
    Err(ApiError::from_response(status, &body))
}
