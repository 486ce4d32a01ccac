use crate::domain::{controller::LookupTarget, errors::AppError};
use ipwho_rs::Lookup;
use std::future::Future;

pub trait GeoLookup: Send + Sync + 'static {
    fn lookup(
        &self,
        target: &LookupTarget,
    ) -> impl Future<Output = Result<Lookup, AppError>> + Send;
}
