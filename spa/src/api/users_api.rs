use gloo_net::http::Request;
use shared::{ApplyResponse, JobId, UpdateUserRequest, UserProfile, UserResponse};

use crate::{
    api::{authorization, endpoint, read_json},
    error::ApiError,
};

pub async fn get_user(base_url: &str, token: &str, username: &str) -> Result<UserProfile, ApiError> {
    let endpoint = endpoint(base_url, &["users", username])?;
    let response = Request::get(endpoint.as_str())
        .header("Authorization", &authorization(token))
        .send()
        .await?;
    let body = read_json::<UserResponse>(response).await?;
    log::info!("Api get user, username={username}");
    Ok(body.user)
}

pub async fn update_user(
    base_url: &str,
    token: &str,
    username: &str,
    request: &UpdateUserRequest,
) -> Result<UserProfile, ApiError> {
    let endpoint = endpoint(base_url, &["users", username])?;
    let response = Request::patch(endpoint.as_str())
        .header("Authorization", &authorization(token))
        .header("Content-Type", "application/json")
        .json(request)?
        .send()
        .await?;
    let body = read_json::<UserResponse>(response).await?;
    log::info!("Api update user, username={username}");
    Ok(body.user)
}

pub async fn apply_to_job(
    base_url: &str,
    token: &str,
    username: &str,
    job_id: JobId,
) -> Result<JobId, ApiError> {
    let job_id = job_id.to_string();
    let endpoint = endpoint(base_url, &["users", username, "jobs", &job_id])?;
    let response = Request::post(endpoint.as_str())
        .header("Authorization", &authorization(token))
        .send()
        .await?;
    let body = read_json::<ApplyResponse>(response).await?;
    log::info!("Api apply to job, username={username}, job_id={}", body.applied);
    Ok(body.applied)
}
