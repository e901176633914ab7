//! Postgres repository tests
//!
//! Need a reachable database at `DATABASE_URL` (or the default config URL).
//! The `books` table is wiped by every test.

use std::sync::Mutex;

use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use book_catalog_server::{
    config::AppConfig,
    models::Book,
    repository::{books::BooksRepository, BookStore, Repository},
};

// Both tests share the `books` table
static DATABASE: Mutex<()> = Mutex::new(());

async fn connect() -> (Pool<Postgres>, BooksRepository) {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| AppConfig::default().database.url);

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    let repository = Repository::new(pool.clone());
    repository.books.prepare().await.expect("Failed to run migrations");
    (pool, repository.books)
}

fn stale_book(book_id: i64, isbn: i64) -> Book {
    Book {
        book_id,
        title: format!("Stale record {}", book_id),
        isbn,
        ..Book::seed()
    }
}

async fn insert(pool: &Pool<Postgres>, book: &Book) {
    sqlx::query(
        r#"
        INSERT INTO books (book_id, title, authors, average_rating, isbn, isbn13,
                           language_code, num_pages, ratings_count, text_reviews_count)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(book.book_id)
    .bind(&book.title)
    .bind(&book.authors)
    .bind(book.average_rating)
    .bind(book.isbn)
    .bind(book.isbn13)
    .bind(&book.language_code)
    .bind(book.num_pages)
    .bind(book.ratings_count)
    .bind(book.text_reviews_count)
    .execute(pool)
    .await
    .expect("Failed to insert book");
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_reset_and_seed_replaces_collection() {
    let _guard = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    let (pool, books) = connect().await;

    // Migrations are safe to apply again
    books.prepare().await.unwrap();
    books.ping().await.unwrap();

    insert(&pool, &stale_book(900, 111)).await;
    insert(&pool, &stale_book(901, 222)).await;

    books.reset_and_seed(&Book::seed()).await.unwrap();
    assert_eq!(books.find_all().await.unwrap(), vec![Book::seed()]);

    // Idempotent across restarts
    books.reset_and_seed(&Book::seed()).await.unwrap();
    assert_eq!(books.find_all().await.unwrap(), vec![Book::seed()]);
}

#[tokio::test]
#[ignore]
async fn test_find_by_isbn() {
    let _guard = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    let (pool, books) = connect().await;

    books.reset_and_seed(&Book::seed()).await.unwrap();

    let found = books.find_by_isbn(Book::seed().isbn).await.unwrap();
    assert_eq!(found, Some(Book::seed()));

    assert_eq!(books.find_by_isbn(12345).await.unwrap(), None);

    // Duplicate isbn: the first inserted record wins
    insert(&pool, &stale_book(902, Book::seed().isbn)).await;
    let found = books.find_by_isbn(Book::seed().isbn).await.unwrap();
    assert_eq!(found.map(|b| b.book_id), Some(Book::seed().book_id));

    let all = books.find_all().await.unwrap();
    let ids: Vec<i64> = all.iter().map(|b| b.book_id).collect();
    assert_eq!(ids, vec![1, 902]);

    books.reset_and_seed(&Book::seed()).await.unwrap();
}
