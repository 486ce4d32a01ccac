use ipwho_rs::{IpWho, Lookup};

use crate::domain::{controller::LookupTarget, errors::AppError, ports::geo_lookup::GeoLookup};

#[derive(Clone)]
pub struct IpWhoRepository {
    ipwho: IpWho,
}

impl IpWhoRepository {
    pub fn new(config: ipwho_rs::types::Config) -> Self {
        let ipwho = IpWho::init(Some(config));
        Self { ipwho }
    }
}

impl GeoLookup for IpWhoRepository {
    async fn lookup(&self, target: &LookupTarget) -> Result<Lookup, AppError> {
        let lookup = match target {
            LookupTarget::Own(Some(origin)) => self.ipwho.lookup(&origin.to_string()).await?,
            LookupTarget::Own(None) => self.ipwho.lookup_self().await?,
            LookupTarget::Address(address) => self.ipwho.lookup(address).await?,
        };
        Ok(lookup)
    }
}
