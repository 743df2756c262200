pub mod auth;
pub mod config;
pub mod fallback;
pub mod models;
pub mod notify;
pub mod render;
pub mod store;
pub mod validate;
pub mod views;

pub mod server;
