//! Session state of the lookup screen and the transitions that drive it.
//!
//! Transitions are plain methods on [`ControllerState`]; anything that needs
//! I/O is returned as an [`Effect`] for the caller to run.

use std::net::IpAddr;

use ipwho_rs::{Lookup, LookupResult};
use serde::Serialize;

use crate::consts::{HARD_FAILURE_MESSAGE, SOFT_FAILURE_MESSAGE};
use crate::domain::view::{Theme, ViewMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTarget {
    /// The caller's own network origin. `None` when the caller's address is
    /// not publicly routable; the geolocation API then sees this server's
    /// egress address instead.
    Own(Option<IpAddr>),
    Address(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(LookupResult),
    /// The API answered but refused the query.
    Rejected,
    /// Transport or decode failure; no answer could be interpreted.
    Failed,
}

impl<E> From<Result<Lookup, E>> for LookupOutcome {
    fn from(response: Result<Lookup, E>) -> Self {
        match response {
            Ok(Lookup::Found(result)) => LookupOutcome::Found(result),
            Ok(Lookup::Rejected { .. }) => LookupOutcome::Rejected,
            Err(_) => LookupOutcome::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    LookupOwn,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ControllerState {
    pub result: Option<LookupResult>,
    pub loading: bool,
    pub searching: bool,
    pub error: Option<String>,
    pub query_text: String,
    pub copied: bool,
    pub view: ViewMode,
    pub theme: Theme,
}

impl ControllerState {
    pub fn begin(&mut self, target: &LookupTarget) {
        match target {
            LookupTarget::Own(_) => self.loading = true,
            LookupTarget::Address(_) => self.searching = true,
        }
        self.error = None;
    }

    /// Applies the answer of a request cycle. Both in-flight flags are
    /// cleared on every path.
    pub fn resolve(&mut self, outcome: LookupOutcome) {
        match outcome {
            LookupOutcome::Found(result) => self.result = Some(result),
            LookupOutcome::Rejected => self.error = Some(SOFT_FAILURE_MESSAGE.to_string()),
            LookupOutcome::Failed => self.error = Some(HARD_FAILURE_MESSAGE.to_string()),
        }
        self.loading = false;
        self.searching = false;
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    pub fn can_search(&self) -> bool {
        !self.searching && !self.query_text.trim().is_empty()
    }

    pub fn mark_copied(&mut self) {
        self.copied = true;
    }

    pub fn clear_copied(&mut self) {
        self.copied = false;
    }

    /// Every entry into `Home`, including re-selecting it, asks for a fresh
    /// self lookup.
    pub fn select_view(&mut self, view: ViewMode) -> Option<Effect> {
        self.view = view;
        match view {
            ViewMode::Home => Some(Effect::LookupOwn),
            ViewMode::About => None,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ip: &str) -> LookupResult {
        serde_json::from_value(serde_json::json!({
            "ip": ip,
            "success": true,
            "type": "IPv4",
            "continent": "Asia",
            "country": "Japan",
            "country_code": "JP",
            "region": "Tokyo",
            "city": "Tokyo",
            "latitude": 35.6761919,
            "longitude": 139.6503106,
            "is_eu": false,
            "postal": "100-0001",
            "calling_code": "81",
            "capital": "Tokyo",
            "connection": {"asn": 2497, "org": "IIJ", "isp": "IIJ", "domain": "iij.ad.jp"},
            "timezone": {
                "id": "Asia/Tokyo",
                "abbr": "JST",
                "is_dst": false,
                "offset": 32400,
                "utc": "+09:00",
                "current_time": "2026-10-19T18:00:00+09:00"
            }
        }))
        .unwrap()
    }

    #[test]
    fn own_lookup_sets_loading_and_clears_error() {
        let mut state = ControllerState {
            error: Some("stale".into()),
            ..Default::default()
        };
        state.begin(&LookupTarget::Own(None));
        assert!(state.loading);
        assert!(!state.searching);
        assert_eq!(state.error, None);
    }

    #[test]
    fn address_lookup_sets_searching() {
        let mut state = ControllerState::default();
        state.begin(&LookupTarget::Address("1.1.1.1".into()));
        assert!(state.searching);
        assert!(!state.loading);
    }

    #[test]
    fn found_replaces_result() {
        let mut state = ControllerState {
            result: Some(sample("10.0.0.1")),
            ..Default::default()
        };
        state.begin(&LookupTarget::Address("1.1.1.1".into()));
        state.resolve(LookupOutcome::Found(sample("1.1.1.1")));
        assert_eq!(state.result.unwrap().ip, "1.1.1.1");
        assert_eq!(state.error, None);
    }

    #[test]
    fn rejection_keeps_previous_result() {
        let mut state = ControllerState {
            result: Some(sample("10.0.0.1")),
            ..Default::default()
        };
        state.begin(&LookupTarget::Address("bogus".into()));
        state.resolve(LookupOutcome::Rejected);
        assert_eq!(state.result.as_ref().unwrap().ip, "10.0.0.1");
        assert_eq!(state.error.as_deref(), Some(SOFT_FAILURE_MESSAGE));
        assert!(!state.searching);
    }

    #[test]
    fn failure_clears_both_flags() {
        let mut state = ControllerState::default();
        state.begin(&LookupTarget::Own(Some("203.0.113.9".parse().unwrap())));
        state.begin(&LookupTarget::Address("1.1.1.1".into()));
        state.resolve(LookupOutcome::Failed);
        assert_eq!(state.error.as_deref(), Some(HARD_FAILURE_MESSAGE));
        assert!(!state.loading);
        assert!(!state.searching);
        assert_eq!(state.result, None);
    }

    #[test]
    fn outcome_from_response() {
        let found: Result<Lookup, ()> = Ok(Lookup::Found(sample("1.1.1.1")));
        assert!(matches!(LookupOutcome::from(found), LookupOutcome::Found(_)));
        let rejected: Result<Lookup, ()> = Ok(Lookup::Rejected { message: None });
        assert_eq!(LookupOutcome::from(rejected), LookupOutcome::Rejected);
        let failed: Result<Lookup, &str> = Err("connection reset");
        assert_eq!(LookupOutcome::from(failed), LookupOutcome::Failed);
    }

    #[test]
    fn search_needs_text_and_no_search_in_flight() {
        let mut state = ControllerState::default();
        assert!(!state.can_search());
        state.set_query("   ");
        assert!(!state.can_search());
        state.set_query(" 8.8.8.8 ");
        assert!(state.can_search());
        state.begin(&LookupTarget::Address("8.8.8.8".into()));
        assert!(!state.can_search());
    }

    #[test]
    fn entering_home_always_requests_self_lookup() {
        let mut state = ControllerState::default();
        assert_eq!(state.select_view(ViewMode::Home), Some(Effect::LookupOwn));
        assert_eq!(state.select_view(ViewMode::About), None);
        assert_eq!(state.view, ViewMode::About);
        assert_eq!(state.select_view(ViewMode::Home), Some(Effect::LookupOwn));
        assert_eq!(state.view, ViewMode::Home);
    }

    #[test]
    fn copy_flag_toggles() {
        let mut state = ControllerState::default();
        state.mark_copied();
        state.mark_copied();
        assert!(state.copied);
        state.clear_copied();
        assert!(!state.copied);
    }
}
