use gloo_net::http::Request;
use shared::{CompaniesResponse, Company, CompanyDetail, CompanyResponse};

use crate::{
    api::{authorization, endpoint, endpoint_with_filter, read_json},
    error::ApiError,
};

pub async fn list_companies(
    base_url: &str,
    token: &str,
    name: Option<&str>,
) -> Result<Vec<Company>, ApiError> {
    let endpoint = endpoint_with_filter(base_url, &["companies"], "name", name)?;
    let response = Request::get(endpoint.as_str())
        .header("Authorization", &authorization(token))
        .send()
        .await?;
    let body = read_json::<CompaniesResponse>(response).await?;
    log::info!(
        "Api list companies, name={name:?}, found={found}",
        found = body.companies.len()
    );
    Ok(body.companies)
}

pub async fn get_company(
    base_url: &str,
    token: &str,
    handle: &str,
) -> Result<CompanyDetail, ApiError> {
    let endpoint = endpoint(base_url, &["companies", handle])?;
    let response = Request::get(endpoint.as_str())
        .header("Authorization", &authorization(token))
        .send()
        .await?;
    let body = read_json::<CompanyResponse>(response).await?;
    log::info!("Api get company, handle={handle}");
    Ok(body.company)
}
