pub mod bot_service;
pub mod lookup_service;
pub mod session_registry;
