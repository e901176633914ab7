//! Catalog service: database lookups and static dataset queries

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, LanguageResponse, SearchQuery, SearchResponse},
    repository::BookStore,
};

use super::dataset::StaticDataset;

/// Path value of `/lang/{lang}` that lists the known language codes
pub const LANGUAGE_LIST: &str = "list";

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn BookStore>,
    dataset: StaticDataset,
}

impl CatalogService {
    pub fn new(store: Arc<dyn BookStore>, dataset: StaticDataset) -> Self {
        Self { store, dataset }
    }

    /// Every record of the database collection
    pub async fn all_books(&self) -> AppResult<Vec<Book>> {
        self.store.find_all().await
    }

    /// Look a book up by ISBN in the database collection.
    ///
    /// Parse and lookup failures both surface as [`AppError::InvalidIsbn`].
    pub async fn get_by_isbn(&self, raw: &str) -> AppResult<Book> {
        let isbn = parse_isbn(raw)
            .ok_or_else(|| AppError::InvalidIsbn(format!("'{}' is not a number", raw)))?;

        self.store
            .find_by_isbn(isbn)
            .await
            .map_err(|e| {
                tracing::warn!("Isbn lookup for {} failed: {}", isbn, e);
                AppError::InvalidIsbn(e.to_string())
            })?
            .ok_or(AppError::NotFound)
    }

    /// Filter and sort the static dataset
    pub fn search(&self, query: &SearchQuery) -> SearchResponse {
        SearchResponse {
            filtered_data: self.dataset.search(query),
            success: true,
        }
    }

    /// Language codes for [`LANGUAGE_LIST`], otherwise books in that language
    pub fn by_language(&self, lang: &str) -> LanguageResponse {
        if lang == LANGUAGE_LIST {
            LanguageResponse::Codes(self.dataset.languages())
        } else {
            LanguageResponse::Books(self.dataset.by_language(lang))
        }
    }
}

/// Parse an ISBN path segment written in any numeric notation
/// (`439785960`, `+439785960`, `439785960.0`, `4.3978596e8`).
///
/// The value must be finite and integral.
fn parse_isbn(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(isbn) = raw.parse::<i64>() {
        return Some(isbn);
    }

    let value: f64 = raw.parse().ok()?;
    // `i64::MAX as f64` rounds up to 2^63, the first value out of range
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
