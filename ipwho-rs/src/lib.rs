pub mod client;
pub mod errors;
pub mod lookup;
pub mod types;
pub mod utils;

pub use client::IpWho;
pub use lookup::{Lookup, LookupResult};
