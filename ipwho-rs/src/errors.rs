use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpWhoError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("ipwho.is returned error ({status}): {body}")]
    ApiError {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Other(String),
}
