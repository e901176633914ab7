//! API handlers for the book catalog REST endpoints

pub mod books;
pub mod lang;
pub mod openapi;
pub mod readiness;
pub mod utility;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes.
///
/// Every route, documentation included, sits behind the readiness gate.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/authors", get(books::list_authors))
        .route("/key", get(utility::get_key))
        .route("/books/search", get(books::search_books))
        .route("/book/isbn/:isbn", get(books::get_book_by_isbn))
        .route("/books/all", get(books::list_all_books))
        .route("/lang/:lang", get(lang::get_language))
        .route("/post", post(utility::echo))
        .with_state(state.clone());

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(middleware::from_fn_with_state(
            state.readiness.clone(),
            readiness::require_database,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CompressionLayer::new()),
        )
}
