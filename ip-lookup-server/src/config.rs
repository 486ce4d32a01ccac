use std::env;

use anyhow::Context;

const SERVER_PORT_KEY: &str = "SERVER_PORT";

const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: String,
    pub telegram_bot_token: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();

        let server_port = load_env(SERVER_PORT_KEY).unwrap_or("3000".to_string());

        let telegram_bot_token =
            load_env(TELEGRAM_BOT_TOKEN).context("Failed to get telegram bot token")?;

        Ok(Config {
            server_port,
            telegram_bot_token,
        })
    }
}

fn load_env(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("failed to load environment variable {}", key))
}
