use std::sync::Arc;

use anyhow::Context;
use ip_lookup_server::{
    adapters::{
        app_state::AppState,
        http::{HttpServer, HttpServerConfig},
    },
    app_config::AppConfig,
    application::services::{
        bot_service::{BotService, CommandRegistry},
        session_registry::SessionRegistry,
    },
    config::Config,
    infrastructure::{
        clipboard::SessionClipboard,
        repository::{ipwho_repository::IpWhoRepository, telegram_repository::TelegramRepository},
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env()?;
    let app_config = AppConfig::load().context("failed to load application config")?;

    let sessions = Arc::new(SessionRegistry::new(
        Arc::new(IpWhoRepository::new(app_config.geo_api())),
        SessionClipboard::shared,
        app_config.session_idle_timeout(),
        app_config.max_sessions,
    ));

    let commands = CommandRegistry::new()
        .command("start", &app_config.start_greeting)
        .with_username(app_config.bot_username.clone());
    let telegram = TelegramRepository::new(&config.telegram_bot_token, &app_config.telegram_api_url)
        .context("failed to set up Telegram client")?;
    let bot_service = Arc::new(BotService::new(commands, telegram));

    let http_server = HttpServer::new(
        HttpServerConfig {
            port: &config.server_port,
        },
        AppState::new(sessions, bot_service, app_config.trust_forwarded_for),
    )
    .await?;
    http_server.run().await
}
