pub mod api;
pub mod config;
pub mod scorer;
pub mod store;
