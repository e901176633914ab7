//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, lang, utility};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Catalog API",
        version = "1.0.0",
        description = "Book catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Books
        books::list_authors,
        books::search_books,
        books::get_book_by_isbn,
        books::list_all_books,
        lang::get_language,
        // Utility
        utility::get_key,
        utility::echo,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::SearchResponse,
            crate::models::book::LanguageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "books", description = "Book catalog"),
        (name = "utility", description = "Utility endpoints")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
