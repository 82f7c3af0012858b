use shared::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Credentials or submitted data rejected by the backend.
    #[error("{0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("unexpected response, status={status}, message={message}")]
    Unexpected { status: u16, message: String },
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl ApiError {
    /// Maps a non-success response to an error, preferring the message of the
    /// backend's `{error: {message, status}}` envelope over the raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|response| response.error.message.joined())
            .unwrap_or_else(|_| body.to_owned());
        match status {
            400 | 401 | 403 => ApiError::Auth(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Unexpected { status, message },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected write, key={0}")]
    Write(String),
    #[error("stored session could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
