//! Shared helpers for driving the router in-process.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use cocktail_grader::app_state::AppState;
use cocktail_grader::routes;
use cocktail_grader::services::catalog::{CatalogProvider, JsonFileCatalog};
use serde_json::Value;
use std::path::PathBuf;
use tower::ServiceExt;

pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Sample catalog shipped with the repository.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn app() -> Router {
    app_with(JsonFileCatalog::new(data_dir()))
}

pub fn app_with(catalog: impl CatalogProvider + 'static) -> Router {
    routes::router(AppState::new(catalog), MAX_BODY_BYTES)
}

/// Send a request and decode the response body as JSON (`Null` when empty or not JSON).
pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(body) = &body {
        builder = builder
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len());
    }
    let request = builder
        .body(Body::from(body.unwrap_or_default()))
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Failed to execute request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, payload: &Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(payload.to_string())).await
}
