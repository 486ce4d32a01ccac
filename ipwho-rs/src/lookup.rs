use serde::{Deserialize, Serialize};

/// Outcome of a request that reached the API and produced a readable body.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(LookupResult),
    /// The API answered with `success: false`, e.g. for an invalid address.
    Rejected { message: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IpType {
    #[serde(rename = "IPv4")]
    V4,
    #[serde(rename = "IPv6")]
    V6,
    #[serde(other)]
    Unknown,
}

/// A successful geolocation record. Only ever built from a body whose
/// `success` flag is true, so every field can be trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub ip: String,
    pub success: bool,
    #[serde(rename = "type")]
    pub ip_type: IpType,
    pub continent: String,
    #[serde(default)]
    pub continent_code: String,
    pub country: String,
    pub country_code: String,
    pub region: String,
    #[serde(default)]
    pub region_code: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_eu: bool,
    pub postal: String,
    pub calling_code: String,
    pub capital: String,
    #[serde(default)]
    pub borders: String,
    #[serde(default)]
    pub flag: Option<Flag>,
    pub connection: Connection,
    pub timezone: Timezone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    pub img: String,
    pub emoji: String,
    pub emoji_unicode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub asn: u64,
    pub org: String,
    pub isp: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timezone {
    pub id: String,
    pub abbr: String,
    pub is_dst: bool,
    pub offset: i64,
    pub utc: String,
    pub current_time: String,
}
