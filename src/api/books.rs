//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{Book, SearchQuery, SearchResponse},
};

/// List every book of the database collection
///
/// Despite the path, this returns full book records, not a list of authors.
#[utoipa::path(
    get,
    path = "/authors",
    tag = "books",
    responses(
        (status = 200, description = "All books of the database collection", body = Vec<Book>),
        (status = 503, description = "Database not ready", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.all_books().await?;
    Ok(Json(books))
}

/// Search the static dataset
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(SearchQuery),
    responses(
        (status = 200, description = "Filtered and sorted books", body = SearchResponse),
        (status = 400, description = "Malformed numeric parameter"),
        (status = 503, description = "Database not ready", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    Json(state.services.catalog.search(&query))
}

/// Get a book of the database collection by ISBN
#[utoipa::path(
    get,
    path = "/book/isbn/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Numeric ISBN")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Invalid isbn", body = crate::error::ErrorResponse),
        (status = 404, description = "No data found", body = String, content_type = "text/plain"),
        (status = 503, description = "Database not ready", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_by_isbn(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_by_isbn(&isbn).await?;
    Ok(Json(book))
}

/// List every book of the database collection
#[utoipa::path(
    get,
    path = "/books/all",
    tag = "books",
    responses(
        (status = 200, description = "All books of the database collection", body = Vec<Book>),
        (status = 503, description = "Database not ready", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_all_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.all_books().await?;
    Ok(Json(books))
}
