pub mod catalog;
pub mod health;
pub mod metrics;
pub mod validate;

use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// API routes with the standard middleware stack. `/metrics` is mounted by the binary.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/cocktails", get(catalog::list_cocktails))
        .route("/api/alcohols", get(catalog::list_alcohols))
        .route("/api/glassware", get(catalog::list_glassware))
        .route("/api/methods", get(catalog::list_methods))
        .route("/api/validate", post(validate::validate_submission))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
}
