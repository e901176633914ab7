//! Business logic services

pub mod bootstrap;
pub mod catalog;
pub mod dataset;
pub mod readiness;
pub mod search;

use std::sync::Arc;

use crate::repository::BookStore;

pub use dataset::StaticDataset;
pub use readiness::{DbReadiness, DbStatus};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services over the database collection and the static dataset
    pub fn new(store: Arc<dyn BookStore>, dataset: StaticDataset) -> Self {
        Self {
            catalog: catalog::CatalogService::new(store, dataset),
        }
    }
}
