pub mod adapters;
pub mod app_config;
pub mod application;
pub mod config;
pub mod consts;
pub mod domain;
pub mod infrastructure;
