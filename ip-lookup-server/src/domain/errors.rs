use axum::{http::StatusCode, response::IntoResponse};
use ipwho_rs::errors::IpWhoError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Geolocation error: {0}")]
    IpWhoError(#[from] IpWhoError),
    #[error("Invalid data {0}")]
    InvalidData(String),
    #[error("Malformed update {0}")]
    MalformedUpdate(#[from] serde_json::Error),
    #[error("Telegram error: {0}")]
    TelegramError(#[from] teloxide::RequestError),
    #[error("No session {0}")]
    SessionNotFound(Uuid),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::InvalidData(_) => StatusCode::BAD_REQUEST,
            AppError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
