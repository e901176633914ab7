//! Filtering and sorting of the static dataset for `GET /books/search`

use crate::models::{Book, SearchQuery};

/// Apply a search query to `books`.
///
/// Works on a private copy: the shared collection is never reordered.
/// Sorting happens before filtering, and the page-count sort runs after the
/// rating sort so it takes precedence when both flags are set. Both sorts are
/// stable.
pub fn filter_books(books: &[Book], query: &SearchQuery) -> Vec<Book> {
    let mut results = books.to_vec();

    if query.sorts_by_rating() {
        results.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
    }

    if query.sorts_by_page_count() {
        results.sort_by(|a, b| b.num_pages.cmp(&a.num_pages));
    }

    if let Some(title) = &query.title {
        let needle = title.to_lowercase();
        results.retain(|book| book.title.to_lowercase().contains(&needle));
    }

    let min_rating = query.rating.unwrap_or(0.0);
    results.retain(|book| book.average_rating >= min_rating);

    if let Some(max_pages) = query.page_count_high {
        results.retain(|book| book.num_pages <= max_pages);
    }

    let min_pages = query.page_count_low.unwrap_or(0);
    results.retain(|book| book.num_pages >= min_pages);

    results
}
