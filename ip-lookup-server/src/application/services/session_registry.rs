//! Per-client lookup sessions.
//!
//! Every front end that opens a session gets its own [`LookupService`], and
//! with it its own controller state, copy timer and clipboard. Sessions that
//! see no traffic for the idle timeout are dropped.

use std::{net::IpAddr, sync::Arc, time::Duration};

use moka::future::Cache;
use uuid::Uuid;

use crate::domain::{
    controller::ControllerState,
    ports::{clipboard::Clipboard, geo_lookup::GeoLookup},
};

use super::lookup_service::LookupService;

type ClipboardFactory = Arc<dyn Fn() -> Arc<dyn Clipboard> + Send + Sync>;

pub struct SessionRegistry<G: GeoLookup> {
    geo: Arc<G>,
    new_clipboard: ClipboardFactory,
    sessions: Cache<Uuid, Arc<LookupService<G>>>,
}

impl<G: GeoLookup> SessionRegistry<G> {
    pub fn new<F>(geo: Arc<G>, new_clipboard: F, idle_timeout: Duration, max_sessions: u64) -> Self
    where
        F: Fn() -> Arc<dyn Clipboard> + Send + Sync + 'static,
    {
        let sessions = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle_timeout)
            .build();

        Self {
            geo,
            new_clipboard: Arc::new(new_clipboard),
            sessions,
        }
    }

    /// Opens a session and mounts it, which looks up `origin` straight away.
    /// The session is registered before the lookup settles.
    pub async fn create(&self, origin: Option<IpAddr>) -> (Uuid, ControllerState) {
        let id = Uuid::new_v4();
        let service = Arc::new(LookupService::new(
            Arc::clone(&self.geo),
            (self.new_clipboard)(),
        ));
        self.sessions.insert(id, Arc::clone(&service)).await;
        tracing::info!(%id, ?origin, "session opened");

        let state = service.mount(origin).await;
        (id, state)
    }

    /// Fetching a session counts as activity and restarts its idle timer.
    pub async fn get(&self, id: &Uuid) -> Option<Arc<LookupService<G>>> {
        self.sessions.get(id).await
    }

    pub async fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.remove(id).await.is_some();
        if removed {
            tracing::info!(%id, "session closed");
        }
        removed
    }
}
