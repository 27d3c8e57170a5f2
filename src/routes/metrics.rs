use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Prometheus scrape endpoint, text exposition format.
pub async fn prometheus_metrics(
    axum::extract::State(handle): axum::extract::State<Arc<PrometheusHandle>>,
) -> impl IntoResponse {
    handle.render()
}

/// Register descriptions for every metric the service emits.
pub fn describe() {
    metrics::describe_counter!("validations_total", "Graded submissions, by outcome");
    metrics::describe_histogram!(
        "validation_duration_seconds",
        "Time to load the catalog and grade one submission"
    );
    metrics::describe_counter!(
        "catalog_load_failures_total",
        "Requests that failed because the catalog could not be loaded"
    );
}
