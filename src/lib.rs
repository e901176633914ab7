//! Book Catalog Server
//!
//! A small REST JSON API over two book collections: a database-backed one,
//! reseeded on every start, and a static dataset loaded from a bundled file.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub readiness: services::DbReadiness,
}
