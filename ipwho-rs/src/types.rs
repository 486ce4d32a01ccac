use url::Url;

use crate::errors::IpWhoError;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub protocol: String,
}

impl Config {
    /// Endpoint URL, optionally with `address` appended as one
    /// percent-encoded path segment.
    pub fn url(&self, address: Option<&str>) -> Result<Url, IpWhoError> {
        let mut url = Url::parse(&format!("{}://{}/", self.protocol, self.host))?;
        if let Some(address) = address {
            url.path_segments_mut()
                .map_err(|_| IpWhoError::Other(format!("{} cannot carry a path", self.host)))?
                .pop_if_empty()
                .push(address);
        }
        Ok(url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "ipwho.is".to_string(),
            protocol: "https".to_string(),
        }
    }
}
