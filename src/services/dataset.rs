//! Static book dataset loaded from a bundled JSON file

use std::{path::Path, sync::Arc};

use indexmap::IndexSet;

use crate::{
    error::{AppError, AppResult},
    models::{Book, SearchQuery},
};

use super::search;

/// Read-only book collection, shared by every request
#[derive(Clone, Debug, Default)]
pub struct StaticDataset {
    books: Arc<Vec<Book>>,
}

impl StaticDataset {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(books),
        }
    }

    /// Load the dataset from a JSON array of book records
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Dataset(format!("Failed to read {}: {}", path.display(), e)))?;

        let books: Vec<Book> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Dataset(format!("Failed to parse {}: {}", path.display(), e)))?;

        tracing::info!("Loaded {} books from {}", books.len(), path.display());
        Ok(Self::new(books))
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<Book> {
        search::filter_books(&self.books, query)
    }

    /// Distinct language codes, in order of first occurrence
    pub fn languages(&self) -> Vec<String> {
        self.books
            .iter()
            .map(|book| book.language_code.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Books whose language code equals `code` exactly
    pub fn by_language(&self, code: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| book.language_code == code)
            .cloned()
            .collect()
    }
}
