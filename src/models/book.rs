//! Book model and search request/response types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Book record, shared by the database collection and the static dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Catalog identifier
    #[serde(rename = "bookID")]
    pub book_id: i64,
    pub title: String,
    /// Authors joined with `/`
    pub authors: String,
    pub average_rating: f64,
    /// Short ISBN, stored as a number
    pub isbn: i64,
    pub isbn13: i64,
    /// Language code (e.g. `eng`)
    pub language_code: String,
    pub num_pages: i32,
    pub ratings_count: i64,
    pub text_reviews_count: i64,
}

impl Book {
    /// The record written to the database collection on every startup
    pub fn seed() -> Self {
        Self {
            book_id: 1,
            title: "Harry Potter and the Half-Blood Prince (Harry Potter #6)".to_string(),
            authors: "J.K. Rowling/Mary GrandPré".to_string(),
            average_rating: 4.57,
            isbn: 439785960,
            isbn13: 9780439785969,
            language_code: "eng".to_string(),
            num_pages: 652,
            ratings_count: 2095690,
            text_reviews_count: 27591,
        }
    }
}

/// Query parameters accepted by `GET /books/search`
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Minimum average rating (inclusive)
    pub rating: Option<f64>,
    /// Any non-empty value sorts by average rating, descending
    pub sort_rating: Option<String>,
    /// Minimum page count (inclusive)
    pub page_count_low: Option<i32>,
    /// Maximum page count (inclusive)
    pub page_count_high: Option<i32>,
    /// Any non-empty value sorts by page count, descending; wins over `sortRating`
    pub sort_page_count: Option<String>,
}

impl SearchQuery {
    pub fn sorts_by_rating(&self) -> bool {
        is_set(&self.sort_rating)
    }

    pub fn sorts_by_page_count(&self) -> bool {
        is_set(&self.sort_page_count)
    }
}

fn is_set(flag: &Option<String>) -> bool {
    flag.as_deref().is_some_and(|v| !v.is_empty())
}

/// Response of `GET /books/search`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub filtered_data: Vec<Book>,
    pub success: bool,
}

/// Response of `GET /lang/{lang}`: either the language list or matching books
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LanguageResponse {
    Codes(Vec<String>),
    Books(Vec<Book>),
}
