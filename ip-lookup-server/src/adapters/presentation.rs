use chrono::DateTime;
use ipwho_rs::{lookup::IpType, LookupResult};
use serde::Serialize;

use crate::domain::{
    controller::ControllerState,
    view::{Theme, ViewMode},
};

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub view: ViewMode,
    pub theme: Theme,
    pub theme_label: &'static str,
    pub loading: bool,
    pub searching: bool,
    pub error: Option<String>,
    pub query: String,
    pub can_search: bool,
    pub copied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<ResultCards>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutView>,
}

#[derive(Debug, Serialize)]
pub struct ResultCards {
    pub main: MainCard,
    pub location: LocationCard,
    pub connection: ConnectionCard,
    pub timezone: TimezoneCard,
}

#[derive(Debug, Serialize)]
pub struct MainCard {
    pub ip: String,
    pub ip_type: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LocationCard {
    pub country: String,
    pub country_code: String,
    pub flag_img: Option<String>,
    pub membership: &'static str,
    pub city: String,
    pub region: String,
    pub postal: String,
    pub capital: String,
    pub calling_code: String,
    pub coordinates: String,
}

#[derive(Debug, Serialize)]
pub struct ConnectionCard {
    pub isp: String,
    pub org: String,
    pub domain: String,
    pub asn: String,
}

#[derive(Debug, Serialize)]
pub struct TimezoneCard {
    pub id: String,
    pub offset: String,
    pub daylight: &'static str,
    pub current_time: String,
}

#[derive(Debug, Serialize)]
pub struct AboutView {
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

impl From<&ControllerState> for SessionView {
    fn from(state: &ControllerState) -> Self {
        let (cards, about) = match state.view {
            ViewMode::Home => (
                state
                    .result
                    .as_ref()
                    .filter(|_| !state.loading)
                    .map(ResultCards::from),
                None,
            ),
            ViewMode::About => (None, Some(AboutView::new())),
        };

        SessionView {
            view: state.view,
            theme: state.theme,
            theme_label: state.theme.label(),
            loading: state.loading,
            searching: state.searching,
            error: state.error.clone(),
            query: state.query_text.clone(),
            can_search: state.can_search(),
            copied: state.copied,
            cards,
            about,
        }
    }
}

impl From<&LookupResult> for ResultCards {
    fn from(r: &LookupResult) -> Self {
        ResultCards {
            main: MainCard {
                ip: r.ip.clone(),
                ip_type: match r.ip_type {
                    IpType::V4 => "IPv4",
                    IpType::V6 => "IPv6",
                    IpType::Unknown => "Unknown",
                },
            },
            location: LocationCard {
                country: r.country.clone(),
                country_code: r.country_code.clone(),
                flag_img: r.flag.as_ref().map(|f| f.img.clone()),
                membership: if r.is_eu { "EU" } else { "Non-EU" },
                city: r.city.clone(),
                region: r.region.clone(),
                postal: r.postal.clone(),
                capital: r.capital.clone(),
                calling_code: format!("+{}", r.calling_code),
                coordinates: format!("{}°, {}°", r.latitude, r.longitude),
            },
            connection: ConnectionCard {
                isp: r.connection.isp.clone(),
                org: r.connection.org.clone(),
                domain: r.connection.domain.clone(),
                asn: format!("AS{}", r.connection.asn),
            },
            timezone: TimezoneCard {
                id: r.timezone.id.clone(),
                offset: format!("{} ({})", r.timezone.utc, r.timezone.abbr),
                daylight: if r.timezone.is_dst { "DST" } else { "Standard" },
                current_time: format_time(&r.timezone.current_time),
            },
        }
    }
}

impl AboutView {
    fn new() -> Self {
        let features = [
            ("Global Coverage", "Worldwide IP geolocation data"),
            ("Privacy First", "No data stored or tracked"),
            ("Lightning Fast", "Instant IP lookup results"),
            ("Mobile Optimized", "Perfect mobile experience"),
        ];
        AboutView {
            features: features
                .into_iter()
                .map(|(title, description)| Feature { title, description })
                .collect(),
        }
    }
}

/// Local wall-clock time of the looked-up address; unparseable input is
/// shown as received.
fn format_time(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
