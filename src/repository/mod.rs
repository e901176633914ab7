//! Repository layer for database operations

pub mod books;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Book};

/// Database-backed book collection.
///
/// Independent from the static dataset: the two collections are never
/// synchronized.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Apply the schema
    async fn prepare(&self) -> AppResult<()>;

    /// Round-trip to the database, used by the readiness monitor
    async fn ping(&self) -> AppResult<()>;

    /// Delete every record, then insert `seed` as the only one
    async fn reset_and_seed(&self, seed: &Book) -> AppResult<()>;

    /// Every record, in insertion order
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    /// First record whose ISBN equals `isbn`
    async fn find_by_isbn(&self, isbn: i64) -> AppResult<Option<Book>>;
}

/// Main repository struct, one member per collection
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool),
        }
    }
}

