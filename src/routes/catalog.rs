use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::app_state::AppState;
use crate::models::alcohol::Alcohol;
use crate::models::cocktail::{Cocktail, PREPARATION_METHODS};
use crate::services::catalog::CatalogError;
use crate::services::glassware::{self, GlasswareEntry};

pub(crate) fn catalog_failure(e: CatalogError) -> StatusCode {
    tracing::error!(error = %e, "Failed to load catalog");
    metrics::counter!("catalog_load_failures_total").increment(1);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// GET /api/cocktails — reference recipes.
pub async fn list_cocktails(State(state): State<AppState>) -> Result<Json<Vec<Cocktail>>, StatusCode> {
    state.catalog.cocktails().await.map(Json).map_err(catalog_failure)
}

/// GET /api/alcohols — ingredient catalog.
pub async fn list_alcohols(State(state): State<AppState>) -> Result<Json<Vec<Alcohol>>, StatusCode> {
    state.catalog.alcohols().await.map(Json).map_err(catalog_failure)
}

/// GET /api/glassware
pub async fn list_glassware() -> Json<Vec<GlasswareEntry>> {
    Json(glassware::all())
}

/// GET /api/methods
pub async fn list_methods() -> Json<&'static [&'static str]> {
    Json(PREPARATION_METHODS)
}
