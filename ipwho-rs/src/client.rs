use crate::errors::IpWhoError;
use crate::lookup::Lookup;
use crate::types::Config;
use crate::utils::send_request;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct IpWho {
    pub config: Arc<Config>,
    client: Client,
}

impl IpWho {
    pub fn init(config: Option<Config>) -> Self {
        Self {
            config: Arc::new(config.unwrap_or_default()),
            client: Client::new(),
        }
    }

    /// Geolocates the address the request originates from.
    pub async fn lookup_self(&self) -> Result<Lookup, IpWhoError> {
        send_request(&self.client, self.config.url(None)?).await
    }

    /// Geolocates `address`. The address is sent as one encoded path segment
    /// without local validation; the API answers malformed input with a
    /// rejection.
    pub async fn lookup(&self, address: &str) -> Result<Lookup, IpWhoError> {
        send_request(&self.client, self.config.url(Some(address.trim()))?).await
    }
}
