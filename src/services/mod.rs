//! Business logic services

pub mod authors;

use std::sync::Arc;

use crate::repository::AuthorStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Arc<dyn AuthorStore>) -> Self {
        Self {
            authors: authors::AuthorsService::new(store),
        }
    }
}
