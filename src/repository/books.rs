//! Postgres implementation of the book collection

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{error::AppResult, models::Book};

const BOOK_COLUMNS: &str = "book_id, title, authors, average_rating, isbn, isbn13, \
                            language_code, num_pages, ratings_count, text_reviews_count";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn prepare(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn reset_and_seed(&self, seed: &Book) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM books").execute(&mut *tx).await?;

        sqlx::query(
            r#"
            INSERT INTO books (book_id, title, authors, average_rating, isbn, isbn13,
                               language_code, num_pages, ratings_count, text_reviews_count)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(seed.book_id)
        .bind(&seed.title)
        .bind(&seed.authors)
        .bind(seed.average_rating)
        .bind(seed.isbn)
        .bind(seed.isbn13)
        .bind(&seed.language_code)
        .bind(seed.num_pages)
        .bind(seed.ratings_count)
        .bind(seed.text_reviews_count)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Book collection reseeded ({} previous records removed)",
            deleted.rows_affected()
        );
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books ORDER BY id",
            BOOK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_isbn(&self, isbn: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE isbn = $1 ORDER BY id LIMIT 1",
            BOOK_COLUMNS
        ))
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
