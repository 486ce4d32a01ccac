use axum::{body::Bytes, extract::State};
use http::StatusCode;

use crate::consts::{WEBHOOK_ERROR, WEBHOOK_OK};
use crate::domain::ports::{geo_lookup::GeoLookup, reply_sink::ReplySink};

use super::app_state::AppState;

/// Telegram delivers updates here. The body is handed to the bot unparsed so
/// that bad payloads surface as processing errors; nothing is retried.
pub async fn telegram_webhook_handler<G: GeoLookup, S: ReplySink>(
    State(state): State<AppState<G, S>>,
    body: Bytes,
) -> (StatusCode, &'static str) {
    tracing::info!("Telegram webhook received");

    match state.bot_service.handle_update(&body).await {
        Ok(()) => (StatusCode::OK, WEBHOOK_OK),
        Err(e) => {
            tracing::error!("Failed to process Telegram update: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, WEBHOOK_ERROR)
        }
    }
}
