use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::consts;

/// Tunables layered from an optional `config.toml` and the environment.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_geo_api_host")]
    pub geo_api_host: String,
    #[serde(default = "default_geo_api_protocol")]
    pub geo_api_protocol: String,
    /// Bot API base URL, scheme included.
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,
    #[serde(default = "default_start_greeting")]
    pub start_greeting: String,
    /// When set, commands addressed to this bot (`/start@geo_bot`) are
    /// answered too. Commands addressed to any other bot are always ignored.
    #[serde(default)]
    pub bot_username: Option<String>,
    /// Sessions untouched for this long are dropped.
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    /// Resolve the caller from `X-Forwarded-For`. Enable only behind a proxy
    /// that sets it.
    #[serde(default)]
    pub trust_forwarded_for: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(File::with_name("config.toml").required(false))
            .add_source(Environment::default())
            .build()?;

        conf.try_deserialize()
    }

    pub fn geo_api(&self) -> ipwho_rs::types::Config {
        ipwho_rs::types::Config {
            host: self.geo_api_host.clone(),
            protocol: self.geo_api_protocol.clone(),
        }
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}

fn default_geo_api_host() -> String {
    "ipwho.is".to_string()
}

fn default_geo_api_protocol() -> String {
    "https".to_string()
}

fn default_telegram_api_url() -> String {
    consts::TELEGRAM_API_URL.to_string()
}

fn default_start_greeting() -> String {
    consts::START_GREETING.to_string()
}

fn default_session_idle_secs() -> u64 {
    consts::SESSION_IDLE.as_secs()
}

fn default_max_sessions() -> u64 {
    10_000
}
