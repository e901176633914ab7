//! Language endpoint over the static dataset

use axum::{
    extract::{Path, State},
    Json,
};

use crate::models::LanguageResponse;

/// List language codes, or books in a given language
///
/// `list` returns the distinct language codes in order of first occurrence.
/// Any other value returns the books whose language code matches exactly,
/// possibly none.
#[utoipa::path(
    get,
    path = "/lang/{lang}",
    tag = "books",
    params(("lang" = String, Path, description = "Language code, or `list`")),
    responses(
        (status = 200, description = "Language codes or matching books", body = LanguageResponse),
        (status = 503, description = "Database not ready", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_language(
    State(state): State<crate::AppState>,
    Path(lang): Path<String>,
) -> Json<LanguageResponse> {
    Json(state.services.catalog.by_language(&lang))
}
