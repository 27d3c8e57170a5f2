//! Metric names and labels emitted by the HTTP handlers.

mod helpers;

use async_trait::async_trait;
use cocktail_grader::models::alcohol::Alcohol;
use cocktail_grader::models::cocktail::Cocktail;
use cocktail_grader::services::catalog::{CatalogError, CatalogProvider, JsonFileCatalog};
use helpers::*;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::json;

struct MissingFilesCatalog;

#[async_trait]
impl CatalogProvider for MissingFilesCatalog {
    async fn cocktails(&self) -> Result<Vec<Cocktail>, CatalogError> {
        JsonFileCatalog::new("/nonexistent/cocktail-grader").cocktails().await
    }

    async fn alcohols(&self) -> Result<Vec<Alcohol>, CatalogError> {
        JsonFileCatalog::new("/nonexistent/cocktail-grader").alcohols().await
    }
}

// The local recorder is thread-bound; #[tokio::test] runs on a single thread.
#[tokio::test]
async fn test_validation_outcomes_counted() {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    let _guard = metrics::set_default_local_recorder(&recorder);

    post_json(
        app(),
        "/api/validate",
        &json!({
            "cocktailId": 10,
            "method": "Wstrząsanie",
            "glassware": "cocktail",
            "ingredients": [
                {"id": "rum-1", "amount": "40"},
                {"id": "soft-3", "amount": "20"},
                {"id": "soft-1", "amount": "20"}
            ]
        }),
    )
    .await;
    post_json(app(), "/api/validate", &json!({"cocktailId": 999})).await;
    post_json(app(), "/api/validate", &json!({})).await;

    let rendered = handle.render();
    assert!(rendered.contains("validations_total{outcome=\"passed\"} 1"), "{rendered}");
    assert!(rendered.contains("validations_total{outcome=\"failed\"} 2"), "{rendered}");
    assert!(rendered.contains("validation_duration_seconds"), "{rendered}");
    assert!(!rendered.contains("catalog_load_failures_total"), "{rendered}");
}

#[tokio::test]
async fn test_catalog_failures_counted() {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    let _guard = metrics::set_default_local_recorder(&recorder);

    post_json(app_with(MissingFilesCatalog), "/api/validate", &json!({"cocktailId": 10})).await;
    get(app_with(MissingFilesCatalog), "/api/alcohols").await;

    let rendered = handle.render();
    assert!(rendered.contains("catalog_load_failures_total 2"), "{rendered}");
    assert!(!rendered.contains("validations_total"), "{rendered}");
}
