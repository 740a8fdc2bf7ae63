//! Planner API: event CRUD over SQLite, user sign-up, and a todo list.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use routes::app;
pub use state::AppState;
pub use store::{connect, ensure_tables};
