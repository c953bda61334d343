pub mod alphabet;
pub mod api;
pub mod config;
pub mod detector;
pub mod error;
pub mod mapping;
pub mod optimizer;
pub mod scorer;
