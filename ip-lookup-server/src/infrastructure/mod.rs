pub mod clipboard;
pub mod repository;
