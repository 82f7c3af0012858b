use gloo_net::http::Request;
use shared::{SignInRequest, SignUpRequest, TokenResponse};

use crate::{
    api::{endpoint, read_json},
    error::ApiError,
};

pub async fn register(base_url: &str, request: &SignUpRequest) -> Result<TokenResponse, ApiError> {
    let endpoint = endpoint(base_url, &["auth", "register"])?;
    log::info!("Api auth register, username={}", request.username);
    let response = Request::post(endpoint.as_str())
        .header("Content-Type", "application/json")
        .json(request)?
        .send()
        .await?;
    read_json::<TokenResponse>(response).await
}

pub async fn token(base_url: &str, request: &SignInRequest) -> Result<TokenResponse, ApiError> {
    let endpoint = endpoint(base_url, &["auth", "token"])?;
    log::info!("Api auth token, username={}", request.username);
    let response = Request::post(endpoint.as_str())
        .header("Content-Type", "application/json")
        .json(request)?
        .send()
        .await?;
    read_json::<TokenResponse>(response).await
}
