//! Authorcat Library Catalog Author Service
//!
//! A Rust implementation of the author-management workflows of a library
//! catalog, providing a REST JSON API for listing, viewing, creating and
//! deleting authors.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub store: Arc<dyn repository::AuthorStore>,
}
