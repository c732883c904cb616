pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod types;

pub use app::{app, AppState};

#[cfg(test)]
pub mod testing;
