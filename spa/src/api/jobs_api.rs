use gloo_net::http::Request;
use shared::{Job, JobsResponse};

use crate::{
    api::{authorization, endpoint_with_filter, read_json},
    error::ApiError,
};

pub async fn list_jobs(
    base_url: &str,
    token: &str,
    title: Option<&str>,
) -> Result<Vec<Job>, ApiError> {
    let endpoint = endpoint_with_filter(base_url, &["jobs"], "title", title)?;
    let response = Request::get(endpoint.as_str())
        .header("Authorization", &authorization(token))
        .send()
        .await?;
    let body = read_json::<JobsResponse>(response).await?;
    log::info!(
        "Api list jobs, title={title:?}, found={found}",
        found = body.jobs.len()
    );
    Ok(body.jobs)
}
