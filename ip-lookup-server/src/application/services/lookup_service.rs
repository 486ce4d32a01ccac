use std::{net::IpAddr, sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle};

use crate::consts::COPY_FEEDBACK;
use crate::domain::{
    controller::{ControllerState, Effect, LookupOutcome, LookupTarget},
    errors::AppError,
    ports::{clipboard::Clipboard, geo_lookup::GeoLookup},
    view::{Theme, ViewMode},
};

/// Drives one session's [`ControllerState`].
///
/// The state lock is released while a request is on the wire, so lookups
/// may overlap; the one that resolves last decides `result` and `error`.
pub struct LookupService<G: GeoLookup> {
    geo: Arc<G>,
    clipboard: Arc<dyn Clipboard>,
    state: Arc<Mutex<ControllerState>>,
    copy_reset: Mutex<Option<JoinHandle<()>>>,
    copy_feedback: Duration,
}

impl<G: GeoLookup> LookupService<G> {
    pub fn new(geo: Arc<G>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self::with_copy_feedback(geo, clipboard, COPY_FEEDBACK)
    }

    pub fn with_copy_feedback(
        geo: Arc<G>,
        clipboard: Arc<dyn Clipboard>,
        copy_feedback: Duration,
    ) -> Self {
        Self {
            geo,
            clipboard,
            state: Arc::new(Mutex::new(ControllerState::default())),
            copy_reset: Mutex::new(None),
            copy_feedback,
        }
    }

    /// Starts a fresh session and immediately looks up the caller's address.
    pub async fn mount(&self, origin: Option<IpAddr>) -> ControllerState {
        *self.state.lock().await = ControllerState::default();
        self.lookup_self(origin).await
    }

    pub async fn snapshot(&self) -> ControllerState {
        self.state.lock().await.clone()
    }

    /// Looks up `origin`, the address the caller connects from.
    pub async fn lookup_self(&self, origin: Option<IpAddr>) -> ControllerState {
        self.run(LookupTarget::Own(origin)).await
    }

    pub async fn lookup_by_address(&self, address: &str) -> Result<ControllerState, AppError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AppError::InvalidData("address must not be blank".to_string()));
        }
        Ok(self.run(LookupTarget::Address(address.to_string())).await)
    }

    pub async fn set_query(&self, text: &str) -> ControllerState {
        let mut state = self.state.lock().await;
        state.set_query(text);
        state.clone()
    }

    /// Submits the search box: stores the text, then looks it up.
    pub async fn submit_search(&self, query: &str) -> Result<ControllerState, AppError> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidData("address must not be blank".to_string()));
        }
        self.state.lock().await.set_query(query);
        self.lookup_by_address(query).await
    }

    pub async fn copy_address(&self, text: &str) -> ControllerState {
        let mut pending = self.copy_reset.lock().await;
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        self.clipboard.write_text(text);
        self.state.lock().await.mark_copied();

        let state = Arc::clone(&self.state);
        let delay = self.copy_feedback;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.lock().await.clear_copied();
        }));
        drop(pending);

        self.snapshot().await
    }

    pub fn clipboard_text(&self) -> Option<String> {
        self.clipboard.read_text()
    }

    pub async fn select_view(&self, view: ViewMode, origin: Option<IpAddr>) -> ControllerState {
        let effect = self.state.lock().await.select_view(view);
        match effect {
            Some(Effect::LookupOwn) => self.lookup_self(origin).await,
            None => self.snapshot().await,
        }
    }

    pub async fn set_theme(&self, theme: Theme) -> ControllerState {
        let mut state = self.state.lock().await;
        state.set_theme(theme);
        state.clone()
    }

    async fn run(&self, target: LookupTarget) -> ControllerState {
        self.state.lock().await.begin(&target);

        let response = self.geo.lookup(&target).await;
        match &response {
            Ok(_) => tracing::debug!(?target, "lookup answered"),
            Err(e) => tracing::warn!(?target, "lookup failed: {}", e),
        }

        let mut state = self.state.lock().await;
        state.resolve(LookupOutcome::from(response));
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::Notify;

    use ipwho_rs::{errors::IpWhoError, Lookup, LookupResult};

    use super::*;
    use crate::consts::{HARD_FAILURE_MESSAGE, SOFT_FAILURE_MESSAGE};
    use crate::infrastructure::clipboard::SessionClipboard;

    fn record(ip: &str) -> LookupResult {
        let family = if ip.contains(':') { "IPv6" } else { "IPv4" };
        serde_json::from_value(serde_json::json!({
            "ip": ip,
            "success": true,
            "type": family,
            "continent": "Oceania",
            "country": "Australia",
            "country_code": "AU",
            "region": "Queensland",
            "city": "Brisbane",
            "latitude": -27.4697707,
            "longitude": 153.0251235,
            "is_eu": false,
            "postal": "4000",
            "calling_code": "61",
            "capital": "Canberra",
            "connection": {"asn": 13335, "org": "APNIC", "isp": "Cloudflare", "domain": "cloudflare.com"},
            "timezone": {
                "id": "Australia/Brisbane",
                "abbr": "AEST",
                "is_dst": false,
                "offset": 36000,
                "utc": "+10:00",
                "current_time": "2026-10-19T19:00:00+10:00"
            }
        }))
        .unwrap()
    }

    /// Answers like the real API: own address is 198.51.100.4, IP literals
    /// are found, `offline` fails in transport, anything else is rejected.
    #[derive(Default)]
    struct FakeGeo {
        own_lookups: AtomicUsize,
    }

    impl GeoLookup for FakeGeo {
        async fn lookup(&self, target: &LookupTarget) -> Result<Lookup, AppError> {
            match target {
                LookupTarget::Own(origin) => {
                    self.own_lookups.fetch_add(1, Ordering::SeqCst);
                    let ip = match origin {
                        Some(ip) => ip.to_string(),
                        None => "198.51.100.4".to_string(),
                    };
                    Ok(Lookup::Found(record(&ip)))
                }
                LookupTarget::Address(a) if a == "offline" => {
                    Err(IpWhoError::Other("connection refused".into()).into())
                }
                LookupTarget::Address(a) if a.parse::<std::net::IpAddr>().is_ok() => {
                    Ok(Lookup::Found(record(a)))
                }
                LookupTarget::Address(_) => Ok(Lookup::Rejected {
                    message: Some("Invalid IP address".into()),
                }),
            }
        }
    }

    fn service() -> LookupService<FakeGeo> {
        LookupService::new(Arc::new(FakeGeo::default()), Arc::new(SessionClipboard::default()))
    }

    /// Own lookups block until `release` is notified; address lookups
    /// answer at once.
    #[derive(Default)]
    struct GatedGeo {
        release: Notify,
    }

    impl GeoLookup for GatedGeo {
        async fn lookup(&self, target: &LookupTarget) -> Result<Lookup, AppError> {
            match target {
                LookupTarget::Own(_) => {
                    self.release.notified().await;
                    Ok(Lookup::Found(record("198.51.100.4")))
                }
                LookupTarget::Address(a) => Ok(Lookup::Found(record(a))),
            }
        }
    }

    #[tokio::test]
    async fn mount_looks_up_own_address() {
        let service = service();
        let state = service.mount(None).await;
        assert_eq!(state.result.unwrap().ip, "198.51.100.4");
        assert!(!state.loading);
        assert_eq!(service.geo.own_lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn search_reports_the_requested_address() {
        let service = service();
        for ip in ["9.9.9.9", "2606:4700:4700::1111"] {
            let state = service.submit_search(ip).await.unwrap();
            assert_eq!(state.result.unwrap().ip, ip);
            assert_eq!(state.error, None);
            assert_eq!(state.query_text, ip);
            assert!(!state.searching);
        }
    }

    #[tokio::test]
    async fn rejected_search_keeps_result() {
        let service = service();
        service.mount(None).await;
        let state = service.submit_search("999.999.1.1").await.unwrap();
        assert_eq!(state.error.as_deref(), Some(SOFT_FAILURE_MESSAGE));
        assert_eq!(state.result.unwrap().ip, "198.51.100.4");
    }

    #[tokio::test]
    async fn transport_failure_settles_flags() {
        let service = service();
        let state = service.lookup_by_address("offline").await.unwrap();
        assert_eq!(state.error.as_deref(), Some(HARD_FAILURE_MESSAGE));
        assert!(!state.loading);
        assert!(!state.searching);
    }

    #[tokio::test]
    async fn own_lookup_uses_callers_origin() {
        let service = service();
        let state = service.mount(Some("203.0.113.50".parse().unwrap())).await;
        assert_eq!(state.result.unwrap().ip, "203.0.113.50");
        let state = service
            .select_view(ViewMode::Home, Some("2001:db8::7".parse().unwrap()))
            .await;
        assert_eq!(state.result.unwrap().ip, "2001:db8::7");
    }

    #[tokio::test]
    async fn overlapping_lookups_are_last_write_wins() {
        let service = Arc::new(LookupService::new(
            Arc::new(GatedGeo::default()),
            Arc::new(SessionClipboard::default()),
        ));

        let slow = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.lookup_self(None).await }
        });
        while !service.snapshot().await.loading {
            tokio::task::yield_now().await;
        }

        // The search settles first and clears both flags, even though the
        // self lookup is still on the wire.
        let state = service.lookup_by_address("2.2.2.2").await.unwrap();
        assert_eq!(state.result.as_ref().unwrap().ip, "2.2.2.2");
        assert!(!state.loading);
        assert!(!state.searching);
        assert!(!slow.is_finished());

        // Nothing was cancelled: the self lookup lands later and overwrites.
        service.geo.release.notify_one();
        let state = slow.await.unwrap();
        assert_eq!(state.result.as_ref().unwrap().ip, "198.51.100.4");
        assert!(!state.loading);
        assert!(!state.searching);
        assert_eq!(service.snapshot().await, state);
    }

    #[tokio::test]
    async fn next_lookup_clears_previous_error() {
        let service = service();
        service.lookup_by_address("offline").await.unwrap();
        let state = service.lookup_self(None).await;
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn blank_search_is_refused_without_touching_state() {
        let service = service();
        service.set_query("previous").await;
        let before = service.snapshot().await;
        assert!(matches!(
            service.submit_search("  \t").await,
            Err(AppError::InvalidData(_))
        ));
        assert!(service.lookup_by_address("").await.is_err());
        assert_eq!(service.snapshot().await, before);
    }

    #[tokio::test]
    async fn every_return_home_refreshes_once() {
        let service = service();
        service.select_view(ViewMode::About, None).await;
        assert_eq!(service.geo.own_lookups.load(Ordering::SeqCst), 0);
        service.select_view(ViewMode::Home, None).await;
        assert_eq!(service.geo.own_lookups.load(Ordering::SeqCst), 1);
        service.select_view(ViewMode::Home, None).await;
        assert_eq!(service.geo.own_lookups.load(Ordering::SeqCst), 2);
        service.select_view(ViewMode::About, None).await;
        let state = service.select_view(ViewMode::Home, None).await;
        assert_eq!(service.geo.own_lookups.load(Ordering::SeqCst), 3);
        assert_eq!(state.view, ViewMode::Home);
    }

    #[tokio::test]
    async fn theme_is_kept() {
        let service = service();
        assert_eq!(service.snapshot().await.theme, Theme::System);
        assert_eq!(service.set_theme(Theme::Purple).await.theme, Theme::Purple);
    }

    #[tokio::test(start_paused = true)]
    async fn copied_flag_resets_after_two_seconds() {
        let service = service();
        let state = service.copy_address("198.51.100.4").await;
        assert!(state.copied);
        assert_eq!(service.clipboard_text().as_deref(), Some("198.51.100.4"));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(service.snapshot().await.copied);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!service.snapshot().await.copied);
    }

    #[tokio::test(start_paused = true)]
    async fn second_copy_restarts_feedback() {
        let service = service();
        service.copy_address("198.51.100.4").await;
        tokio::time::sleep(Duration::from_millis(1500)).await;
        service.copy_address("9.9.9.9").await;

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(service.snapshot().await.copied);

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert!(!service.snapshot().await.copied);
        assert_eq!(service.clipboard_text().as_deref(), Some("9.9.9.9"));
    }
}
