pub mod app_state;
pub mod client_origin;
pub mod http;
pub mod presentation;
pub mod session;
pub mod telegram_webhook;
