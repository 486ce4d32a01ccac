pub mod ipwho_repository;
pub mod telegram_repository;
