use std::sync::Arc;

use crate::{
    application::services::{bot_service::BotService, session_registry::SessionRegistry},
    domain::ports::{geo_lookup::GeoLookup, reply_sink::ReplySink},
};

/// Long-lived services built once at startup and shared by every request.
pub struct AppState<G: GeoLookup, S: ReplySink> {
    pub sessions: Arc<SessionRegistry<G>>,
    pub bot_service: Arc<BotService<S>>,
    /// Take the caller's address from `X-Forwarded-For` (behind a proxy)
    /// rather than from the TCP peer.
    pub trust_forwarded_for: bool,
}

impl<G: GeoLookup, S: ReplySink> AppState<G, S> {
    pub fn new(
        sessions: Arc<SessionRegistry<G>>,
        bot_service: Arc<BotService<S>>,
        trust_forwarded_for: bool,
    ) -> Self {
        Self {
            sessions,
            bot_service,
            trust_forwarded_for,
        }
    }
}

impl<G: GeoLookup, S: ReplySink> Clone for AppState<G, S> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            bot_service: Arc::clone(&self.bot_service),
            trust_forwarded_for: self.trust_forwarded_for,
        }
    }
}
