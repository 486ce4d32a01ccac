pub mod clipboard;
pub mod geo_lookup;
pub mod reply_sink;
