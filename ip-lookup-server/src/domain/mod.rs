pub mod controller;
pub mod errors;
pub mod ports;
pub mod telegram;
pub mod view;
